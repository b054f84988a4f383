//! # Common Test Utilities
//!
//! Shared test infrastructure: an in-memory SQLite database migrated to the
//! current schema, plus the canonical two-teams/four-members fixture.

use std::sync::Once;

use migration::{Migrator, MigratorTrait};
use repository::MemberRepository;
use sea_orm::{ConnectOptions, Database, DbConn};

/// Initialize test logging (run once per test session)
static INIT: Once = Once::new();

/// Initialize test environment including structured logging
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Create a fresh in-memory database with the schema applied.
///
/// A single pooled connection keeps the in-memory database alive and shared
/// for the duration of the test.
pub async fn setup_db() -> DbConn {
    init_test_env();

    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations to test database");

    db
}

/// Seed teamA/teamB with member1..member4 (ages 10/20/30/40).
///
/// Returns the team ids as (team_a, team_b).
pub async fn seed_four_members(repo: &MemberRepository) -> (i64, i64) {
    let team_a = repo.save_team("teamA").await.expect("save teamA");
    let team_b = repo.save_team("teamB").await.expect("save teamB");

    repo.save("member1", 10, Some(team_a.id)).await.expect("save member1");
    repo.save("member2", 20, Some(team_a.id)).await.expect("save member2");
    repo.save("member3", 30, Some(team_b.id)).await.expect("save member3");
    repo.save("member4", 40, Some(team_b.id)).await.expect("save member4");

    (team_a.id, team_b.id)
}
