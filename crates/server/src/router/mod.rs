//! # API Router Configuration
//!
//! Configures API routes for the member search service.

use axum::{
    extract::{Query, State as AxumState},
    routing::get,
    Json,
    Router,
};
use error::Result;
use repository::{MemberTeamDto, Page};

use crate::{dto::members::MemberSearchQuery, AppState};

/// Creates the API router with all search routes
///
/// # Arguments
///
/// * `state` - Application state containing the DB pool
///
/// # Returns
///
/// Configured Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/members", get(search_members_v1))
        .route("/v2/members", get(search_members_v2))
        .route("/v3/members", get(search_members_v3))
        .with_state(state)
}

/// Wrapper handler for the unrestricted search endpoint
async fn search_members_v1(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<MemberSearchQuery>,
) -> Result<Json<Vec<MemberTeamDto>>> {
    crate::members::search_members_v1_handler(&state, query).await
}

/// Wrapper handler for the simple paged search endpoint
async fn search_members_v2(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<MemberSearchQuery>,
) -> Result<Json<Page<MemberTeamDto>>> {
    crate::members::search_members_v2_handler(&state, query).await
}

/// Wrapper handler for the count-skipping paged search endpoint
async fn search_members_v3(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<MemberSearchQuery>,
) -> Result<Json<Page<MemberTeamDto>>> {
    crate::members::search_members_v3_handler(&state, query).await
}

/// Creates the health check router
pub fn create_health_router() -> Router { Router::new().route("/health", get(|| async { "OK" })) }

/// Creates the main application router
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .merge(create_health_router())
        .merge(create_router(state))
}
