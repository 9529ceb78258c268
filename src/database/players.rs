use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::domain::models::{PlayerProfile, Role};

use super::connection::DbConn;

pub fn insert_player(conn: &mut DbConn, player: &PlayerProfile) -> Result<()> {
    let sql = "INSERT OR REPLACE INTO players (id, name, role, age, position) VALUES (?1, ?2, ?3, ?4, ?5)";

    conn.execute(
        sql,
        params![
            player.id,
            player.name,
            player.role.as_str(),
            player.age,
            player.position
        ],
    )
    .context("Failed to insert player")?;

    Ok(())
}

pub fn find_by_id(conn: &mut DbConn, id: &str) -> Result<Option<PlayerProfile>> {
    let sql = "SELECT id, name, role, age, position FROM players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<PlayerProfile>> {
    let sql = "SELECT id, name, role, age, position FROM players";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerProfile> {
    let role: String = row.get(2)?;
    Ok(PlayerProfile {
        id: row.get(0)?,
        name: row.get(1)?,
        role: Role::parse(&role).ok_or_else(|| super::bad_enum_value(2, &role))?,
        age: row.get(3)?,
        position: row.get(4)?,
    })
}
