use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde::Deserialize;

use crate::config::AppConfig;

pub mod admin;
pub mod players;
pub mod rankings;
pub mod score;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
    pub config: AppConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingParams {
    pub age_range: Option<String>,
    pub position: Option<String>,
    pub level: Option<String>,
    pub min_points: Option<i64>,
    pub max_points: Option<i64>,
}
