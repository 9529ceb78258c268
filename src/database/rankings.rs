use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::domain::models::Level;
use crate::ranking::PlayerRanking;

use super::connection::DbConn;

/// Replace the whole leaderboard in one transaction. The ranking engine
/// produces full snapshots, never partial patches, so persistence follows
/// suit.
pub fn replace_all(
    conn: &mut DbConn,
    rankings: &[PlayerRanking],
    calculated_at: DateTime<Utc>,
) -> Result<()> {
    let tx = conn
        .transaction()
        .context("Failed to open rankings transaction")?;

    tx.execute("DELETE FROM rankings", [])
        .context("Failed to clear rankings")?;

    {
        let sql = "INSERT INTO rankings (player_id, rank, total_points, level, consistency, improvement, calculated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
        let mut stmt = tx.prepare(sql)?;
        for ranking in rankings {
            stmt.execute(params![
                ranking.player_id,
                ranking.rank as i64,
                ranking.total_points,
                ranking.level.as_str(),
                ranking.consistency,
                ranking.improvement,
                calculated_at
            ])
            .with_context(|| format!("Failed to insert ranking for {}", ranking.player_id))?;
        }
    }

    tx.commit().context("Failed to commit rankings")
}

/// Ranked leaderboard joined with player display fields, rank ascending.
pub fn list_ranked(conn: &mut DbConn) -> Result<Vec<PlayerRanking>> {
    let sql = "SELECT r.player_id, p.name, p.age, p.position, r.total_points, r.rank, r.level, r.consistency, r.improvement \
               FROM rankings r JOIN players p ON p.id = r.player_id \
               ORDER BY r.rank";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_ranking_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_ranking_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerRanking> {
    let rank: i64 = row.get(5)?;
    let level: String = row.get(6)?;
    Ok(PlayerRanking {
        player_id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        position: row.get(3)?,
        total_points: row.get(4)?,
        rank: rank as usize,
        level: Level::parse(&level).ok_or_else(|| super::bad_enum_value(6, &level))?,
        consistency: row.get(7)?,
        improvement: row.get(8)?,
    })
}
