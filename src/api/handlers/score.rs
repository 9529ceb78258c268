use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{ScoreRequest, ScoreResponse};
use crate::database;
use crate::scoring;

use super::AppState;

/// Score a set of raw metric values against a challenge. Validation is
/// advisory: the response always carries a score, even for invalid input,
/// and the validation report alongside it.
pub async fn post_score(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScoreRequest>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let challenge = match database::challenges::find_by_id(&mut conn, &request.challenge_id) {
        Ok(Some(challenge)) => challenge,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                format!("Unknown challenge: {}", request.challenge_id),
            )
                .into_response()
        }
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    let validation = scoring::validate_metrics(&challenge, &request.metric_values);
    let score =
        scoring::score_submission(&challenge, &request.metric_values, &state.config.scoring);

    Json(ScoreResponse { validation, score }).into_response()
}
