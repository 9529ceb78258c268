use serde::{Deserialize, Serialize};

use crate::domain::models::Level;

/// One leaderboard entry. Rank is meaningful only after the full-population
/// sort; a single entry carries no rank on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanking {
    pub player_id: String,
    pub name: String,
    pub age: Option<u8>,
    pub position: Option<String>,
    pub total_points: i64,
    /// 1-based dense rank, descending by total points.
    pub rank: usize,
    pub level: Level,
    /// 0..100 blend of approval rate and activity recency.
    pub consistency: f64,
    /// 0..100 recent-versus-historical performance score.
    pub improvement: f64,
}
