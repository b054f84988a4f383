//! # Member Search Handlers
//!
//! HTTP request handlers for the three member search variants.

use axum::Json;
use error::{AppError, Result};
use repository::{MemberRepository, MemberTeamDto, Page};
use tracing::info;
use validator::Validate;

use crate::{dto::members::MemberSearchQuery, AppState};

/// Unrestricted search: every matching member, no pagination.
pub async fn search_members_v1_handler(state: &AppState, query: MemberSearchQuery) -> Result<Json<Vec<MemberTeamDto>>> {
    let condition = query.condition();

    let repo = MemberRepository::new(state.db.clone());
    let members = repo.search(&condition).await?;

    info!(matched = members.len(), "v1 member search");

    Ok(Json(members))
}

/// Simple paged search: always issues the count query.
pub async fn search_members_v2_handler(state: &AppState, query: MemberSearchQuery) -> Result<Json<Page<MemberTeamDto>>> {
    query.validate().map_err(|e| {
        AppError::Validation {
            message: e.to_string(),
        }
    })?;

    let repo = MemberRepository::new(state.db.clone());
    let page = repo
        .search_page_simple(&query.condition(), query.page_request())
        .await?;

    info!(
        page = page.page,
        size = page.size,
        total = page.total_elements,
        "v2 member search"
    );

    Ok(Json(page))
}

/// Complex paged search: skips the count query when the fetched page already
/// reveals the exact total.
pub async fn search_members_v3_handler(state: &AppState, query: MemberSearchQuery) -> Result<Json<Page<MemberTeamDto>>> {
    query.validate().map_err(|e| {
        AppError::Validation {
            message: e.to_string(),
        }
    })?;

    let repo = MemberRepository::new(state.db.clone());
    let page = repo
        .search_page_complex(&query.condition(), query.page_request())
        .await?;

    info!(
        page = page.page,
        size = page.size,
        total = page.total_elements,
        "v3 member search"
    );

    Ok(Json(page))
}
