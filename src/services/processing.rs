use anyhow::Result;
use chrono::Utc;
use log::info;
use std::collections::HashMap;

use crate::config::AppConfig;
use crate::database::{self, DbConn};
use crate::domain::models::{PlayerProfile, Role, Submission};
use crate::progression;
use crate::ranking;

/// Batch leaderboard recomputation. Reads the full snapshot, produces a full
/// replacement ranking, then runs the level gate over every player. Triggered
/// whenever upstream data changes; safe to re-run at any time.
pub struct ProcessingService {
    config: AppConfig,
}

impl ProcessingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        let db_path = database::connection::database_path();

        info!("=== Starting Ranking Recomputation ===\n");
        info!("Target DB: {}", db_path);

        let pool = database::create_pool(&db_path)?;
        let mut conn = database::get_connection(&pool)?;

        // Step 1: Load the full snapshot
        let players = database::players::list_all(&mut conn)?;
        let progress = database::progress::list_all(&mut conn)?;
        let videos = database::videos::list_all(&mut conn)?;
        let submissions = database::submissions::list_all(&mut conn)?;
        info!(
            "  → Snapshot: {} players, {} progress records, {} videos, {} submissions\n",
            players.len(),
            progress.len(),
            videos.len(),
            submissions.len()
        );

        // Step 2: Compute and persist the replacement leaderboard
        let now = Utc::now();
        let rankings = ranking::generate_rankings(
            &players,
            &progress,
            &videos,
            now,
            &self.config.ranking,
            &self.config.trend,
        );
        database::rankings::replace_all(&mut conn, &rankings, now)?;
        info!("  → Saved {} leaderboard entries\n", rankings.len());

        // Step 3: Level gate pass
        let unlocked = self.apply_level_unlocks(&mut conn, &players, &submissions)?;
        info!("  → Advanced {} players to their next level\n", unlocked);

        info!("=== Processing Complete ===");
        Ok(())
    }

    fn apply_level_unlocks(
        &self,
        conn: &mut DbConn,
        players: &[PlayerProfile],
        submissions: &[Submission],
    ) -> Result<usize> {
        let total_challenges = database::challenges::count_all(conn)?;

        let mut by_player: HashMap<&str, Vec<Submission>> = HashMap::new();
        for submission in submissions {
            by_player
                .entry(submission.player_id.as_str())
                .or_default()
                .push(submission.clone());
        }

        let mut unlocked = 0;
        for player in players.iter().filter(|p| p.role == Role::Player) {
            let Some(progress) = database::progress::find_by_player(conn, &player.id)? else {
                continue;
            };

            let empty = Vec::new();
            let player_submissions = by_player.get(player.id.as_str()).unwrap_or(&empty);
            let stats = progression::progression_stats(player_submissions, total_challenges);
            let eligibility =
                progression::check_eligibility(&progress, &stats, &self.config.progression);

            if eligibility.can_advance {
                if let Some(next) = eligibility.next_level {
                    database::progress::set_current_level(conn, &player.id, next)?;
                    info!(
                        "  Player {} advanced from {} to {}",
                        player.id,
                        progress.current_level.as_str(),
                        next.as_str()
                    );
                    unlocked += 1;
                }
            }
        }

        Ok(unlocked)
    }
}
