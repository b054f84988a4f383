//! # Data Transfer Objects
//!
//! Request parameter types for the member search endpoints. Response shapes
//! come straight from the repository crate (`MemberTeamDto`, `Page`).

pub mod members;
