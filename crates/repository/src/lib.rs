//! # Member Search Repository
//!
//! Data-access layer for searching members and their teams.
//!
//! ## Modules
//!
//! - [`condition`]: optional-field search condition and predicate builder
//! - [`page`]: page request/envelope types and the count-skip decision
//! - [`members`]: query execution and row projection
//!
//! The search path composes one dynamic `Condition` from the present fields
//! of a [`condition::MemberSearchCondition`], left-joins members to teams,
//! and projects rows into [`members::MemberTeamDto`] inside the query. Paged
//! variants fetch one offset/limit page; the "complex" variant consults
//! [`page::total_without_count`] to avoid the count round trip whenever the
//! fetched page already reveals the exact total.

pub mod condition;
pub mod members;
pub mod page;

pub use condition::MemberSearchCondition;
pub use members::{MemberRepository, MemberTeamDto};
pub use page::{Page, PageRequest};
