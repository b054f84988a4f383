//! # Member Search API Server
//!
//! Axum-based HTTP API exposing the member search endpoints.
//!
//! ## Modules
//!
//! - [`dto`]: Request/response data transfer objects
//! - [`members`]: Search endpoint handlers
//! - [`router`]: API route configuration
//! - [`seed`]: Optional demo data seeding

pub mod dto;
pub mod members;
pub mod router;
pub mod seed;

pub use router::create_app_router;

/// Application state shared across request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db:         sea_orm::DbConn,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Creates application state around an open connection
    pub fn new(db: sea_orm::DbConn) -> Self {
        Self {
            db,
            start_time: std::time::Instant::now(),
        }
    }
}
