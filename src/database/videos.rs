use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::models::{SubmissionStatus, Video};

use super::connection::DbConn;

pub fn insert_video(conn: &mut DbConn, video: &Video) -> Result<()> {
    let sql = "INSERT OR REPLACE INTO videos (id, player_id, challenge_id, status, admin_score, uploaded_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    conn.execute(
        sql,
        params![
            video.id,
            video.player_id,
            video.challenge_id,
            video.status.as_str(),
            video.admin_score,
            video.uploaded_at
        ],
    )
    .context("Failed to insert video")?;

    Ok(())
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Video>> {
    let sql = "SELECT id, player_id, challenge_id, status, admin_score, uploaded_at FROM videos ORDER BY uploaded_at";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_video_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_video_row(row: &rusqlite::Row) -> rusqlite::Result<Video> {
    let status: String = row.get(3)?;
    Ok(Video {
        id: row.get(0)?,
        player_id: row.get(1)?,
        challenge_id: row.get(2)?,
        status: SubmissionStatus::parse(&status).ok_or_else(|| super::bad_enum_value(3, &status))?,
        admin_score: row.get(4)?,
        uploaded_at: row.get(5)?,
    })
}
