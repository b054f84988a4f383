//! # Database Migrations
//!
//! Sea-ORM migrations for the member search schema: a `teams` table and a
//! `members` table carrying the `team_id` foreign key. The association lives
//! only on the member side.

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_teams_table;
mod m20260301_000002_create_members_table;

/// The main migrator that coordinates all migration operations
///
/// Migrations are executed in the order they appear in this list.
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // teams first: members reference it
            Box::new(m20260301_000001_create_teams_table::Migration),
            Box::new(m20260301_000002_create_members_table::Migration),
        ]
    }
}

/// Database connection helper for CLI usage
pub async fn connect_to_database(database_url: &str) -> Result<sea_orm::DatabaseConnection, sea_orm::DbErr> {
    sea_orm::Database::connect(database_url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_count() { assert_eq!(Migrator::migrations().len(), 2); }
}
