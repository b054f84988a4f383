//! # Member Search Query Parameters
//!
//! Decodes the optional search condition and pagination parameters from the
//! request query string.

use repository::{MemberSearchCondition, PageRequest};
use serde::Deserialize;
use validator::Validate;

/// Query parameters for the member search endpoints
///
/// All condition fields are optional; pagination applies only to the paged
/// variants. Negative values never reach the handlers: the unsigned types
/// make the query-string extractor reject them.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchQuery {
    /// Exact username filter
    pub username:  Option<String>,
    /// Exact team name filter
    pub team_name: Option<String>,
    /// Minimum age, inclusive
    pub age_goe:   Option<i32>,
    /// Maximum age, inclusive
    pub age_loe:   Option<i32>,
    /// Page number (zero-based, default: 0)
    pub page:      Option<u64>,
    /// Items per page (default: 20, max: 100)
    #[validate(range(min = 1, max = 100, message = "size must be between 1 and 100"))]
    pub size:      Option<u64>,
}

impl MemberSearchQuery {
    /// Split off the search condition.
    pub fn condition(&self) -> MemberSearchCondition {
        MemberSearchCondition {
            username:  self.username.clone(),
            team_name: self.team_name.clone(),
            age_goe:   self.age_goe,
            age_loe:   self.age_loe,
        }
    }

    /// Get page number (zero-based, default: 0)
    pub fn page(&self) -> u64 { self.page.unwrap_or(0) }

    /// Get items per page (default: 20)
    pub fn size(&self) -> u64 { self.size.unwrap_or(20) }

    /// Build the page request for the paged variants.
    pub fn page_request(&self) -> PageRequest { PageRequest::of(self.page(), self.size()) }
}
