//! Entity definitions for the member directory
//!
//! This crate contains Sea-ORM entity definitions for the database models.
//! The member row exclusively owns its team association via `team_id`; the
//! team side carries no member collection, so a "members of a team" view is
//! always a derived query.

pub mod members;
pub use members::Entity as Members;
pub mod teams;
pub use teams::Entity as Teams;
