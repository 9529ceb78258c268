use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::domain::models::{Level, PlayerProgress};

use super::connection::DbConn;

pub fn upsert_progress(conn: &mut DbConn, progress: &PlayerProgress) -> Result<()> {
    let sql = "INSERT OR REPLACE INTO progress (player_id, completed_videos, completed_series, achievements, last_activity, current_level) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    let completed_videos = serde_json::to_string(&progress.completed_videos)
        .context("Failed to serialize completed videos")?;
    let completed_series = serde_json::to_string(&progress.completed_series)
        .context("Failed to serialize completed series")?;
    let achievements = serde_json::to_string(&progress.achievements)
        .context("Failed to serialize achievements")?;

    conn.execute(
        sql,
        params![
            progress.player_id,
            completed_videos,
            completed_series,
            achievements,
            progress.last_activity,
            progress.current_level.as_str()
        ],
    )
    .context("Failed to upsert progress")?;

    Ok(())
}

pub fn find_by_player(conn: &mut DbConn, player_id: &str) -> Result<Option<PlayerProgress>> {
    let sql = "SELECT player_id, completed_videos, completed_series, achievements, last_activity, current_level FROM progress WHERE player_id = ?1";

    conn.query_row(sql, params![player_id], parse_progress_row)
        .optional()
        .context("Failed to query progress by player")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<PlayerProgress>> {
    let sql = "SELECT player_id, completed_videos, completed_series, achievements, last_activity, current_level FROM progress";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_progress_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Idempotent single-field level unlock. Historical scores are untouched.
pub fn set_current_level(conn: &mut DbConn, player_id: &str, level: Level) -> Result<()> {
    let sql = "UPDATE progress SET current_level = ?1 WHERE player_id = ?2";

    conn.execute(sql, params![level.as_str(), player_id])
        .context("Failed to update current level")?;

    Ok(())
}

fn parse_progress_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerProgress> {
    let level: String = row.get(5)?;
    Ok(PlayerProgress {
        player_id: row.get(0)?,
        completed_videos: super::json_column(row, 1)?,
        completed_series: super::json_column(row, 2)?,
        achievements: super::json_column(row, 3)?,
        last_activity: row.get(4)?,
        current_level: Level::parse(&level).ok_or_else(|| super::bad_enum_value(5, &level))?,
    })
}
