use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::ChallengeStatsResponse;
use crate::database;
use crate::stats::aggregate_challenge_stats;

use super::AppState;

/// Per-(player, challenge) statistics, recomputed from the submission set on
/// every request rather than read from a materialized copy.
pub async fn get_player_challenge_stats(
    State(state): State<Arc<AppState>>,
    Path((player_id, challenge_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    match database::players::find_by_id(&mut conn, &player_id) {
        Ok(Some(_)) => {}
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    }

    let submissions = match database::submissions::list_by_player(&mut conn, &player_id) {
        Ok(rows) => rows,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    let stats = aggregate_challenge_stats(&challenge_id, &submissions, &state.config.trend);

    Json(ChallengeStatsResponse::from(stats)).into_response()
}
