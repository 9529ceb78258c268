use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::models::{Submission, SubmissionStatus};
use crate::scoring::Rating;

use super::connection::DbConn;

pub fn insert_submission(conn: &mut DbConn, submission: &Submission) -> Result<()> {
    let sql = "INSERT OR REPLACE INTO submissions (id, player_id, challenge_id, metric_values, metric_scores, total_score, overall_rating, status, submitted_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

    let metric_values = serde_json::to_string(&submission.metric_values)
        .context("Failed to serialize metric values")?;
    let metric_scores = serde_json::to_string(&submission.metric_scores)
        .context("Failed to serialize metric scores")?;

    conn.execute(
        sql,
        params![
            submission.id,
            submission.player_id,
            submission.challenge_id,
            metric_values,
            metric_scores,
            submission.total_score,
            submission.overall_rating.map(|r| r.as_str()),
            submission.status.as_str(),
            submission.submitted_at
        ],
    )
    .context("Failed to insert submission")?;

    Ok(())
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Submission>> {
    let sql = "SELECT id, player_id, challenge_id, metric_values, metric_scores, total_score, overall_rating, status, submitted_at FROM submissions";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_submission_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_by_player(conn: &mut DbConn, player_id: &str) -> Result<Vec<Submission>> {
    let sql = "SELECT id, player_id, challenge_id, metric_values, metric_scores, total_score, overall_rating, status, submitted_at FROM submissions WHERE player_id = ?1 ORDER BY submitted_at";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![player_id], parse_submission_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_submission_row(row: &rusqlite::Row) -> rusqlite::Result<Submission> {
    let rating: Option<String> = row.get(6)?;
    let overall_rating = match rating {
        Some(s) => Some(Rating::parse(&s).ok_or_else(|| super::bad_enum_value(6, &s))?),
        None => None,
    };
    let status: String = row.get(7)?;

    Ok(Submission {
        id: row.get(0)?,
        player_id: row.get(1)?,
        challenge_id: row.get(2)?,
        metric_values: super::json_column(row, 3)?,
        metric_scores: super::json_column(row, 4)?,
        total_score: row.get(5)?,
        overall_rating,
        status: SubmissionStatus::parse(&status).ok_or_else(|| super::bad_enum_value(7, &status))?,
        submitted_at: row.get(8)?,
    })
}
