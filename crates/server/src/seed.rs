//! # Demo Data Seeding
//!
//! Optional startup seed: two teams and one hundred members, alternating
//! between them, for exercising the search endpoints locally.

use error::{Result, ResultExt};
use repository::MemberRepository;
use tracing::info;

use crate::AppState;

/// Seed demo teams and members if the members table is empty.
pub async fn seed_demo_members(state: &AppState) -> Result<()> {
    let repo = MemberRepository::new(state.db.clone());

    if !repo.find_all().await?.is_empty() {
        return Ok(());
    }

    info!("Seeding demo teams and members...");

    let team_a = repo.save_team("teamA").await.context("Failed to seed teamA")?;
    let team_b = repo.save_team("teamB").await.context("Failed to seed teamB")?;

    for i in 0..100i32 {
        let team_id = if i % 2 == 0 { team_a.id } else { team_b.id };
        repo.save(&format!("member{}", i), i, Some(team_id))
            .await
            .context("Failed to seed demo member")?;
    }

    info!("Demo data seeded successfully");

    Ok(())
}
