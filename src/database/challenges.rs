use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::domain::models::{Challenge, Level};

use super::connection::DbConn;

pub fn insert_challenge(conn: &mut DbConn, challenge: &Challenge) -> Result<()> {
    let sql = "INSERT OR REPLACE INTO challenges (id, title, difficulty, level, points, metrics, thresholds) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

    let metrics = serde_json::to_string(&challenge.metrics)
        .context("Failed to serialize challenge metrics")?;
    let thresholds = serde_json::to_string(&challenge.thresholds)
        .context("Failed to serialize challenge thresholds")?;

    conn.execute(
        sql,
        params![
            challenge.id,
            challenge.title,
            challenge.difficulty,
            challenge.level.as_str(),
            challenge.points,
            metrics,
            thresholds
        ],
    )
    .context("Failed to insert challenge")?;

    Ok(())
}

pub fn find_by_id(conn: &mut DbConn, id: &str) -> Result<Option<Challenge>> {
    let sql = "SELECT id, title, difficulty, level, points, metrics, thresholds FROM challenges WHERE id = ?1";

    conn.query_row(sql, params![id], parse_challenge_row)
        .optional()
        .context("Failed to query challenge by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Challenge>> {
    let sql = "SELECT id, title, difficulty, level, points, metrics, thresholds FROM challenges";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_challenge_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_all(conn: &mut DbConn) -> Result<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM challenges", [], |row| row.get(0))
        .context("Failed to count challenges")?;
    Ok(count as usize)
}

fn parse_challenge_row(row: &rusqlite::Row) -> rusqlite::Result<Challenge> {
    let level: String = row.get(3)?;
    Ok(Challenge {
        id: row.get(0)?,
        title: row.get(1)?,
        difficulty: row.get(2)?,
        level: Level::parse(&level).ok_or_else(|| super::bad_enum_value(3, &level))?,
        points: row.get(4)?,
        metrics: super::json_column(row, 5)?,
        thresholds: super::json_column(row, 6)?,
    })
}
