use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::LeaderboardResponse;
use crate::database;
use crate::domain::models::Level;
use crate::ranking::{filter_rankings, RankingFilter};

use super::{AppState, RankingParams};

pub async fn get_rankings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankingParams>,
) -> impl IntoResponse {
    let level = match params.level.as_deref() {
        Some(raw) => match Level::parse(raw) {
            Some(level) => Some(level),
            None => {
                return (StatusCode::BAD_REQUEST, format!("Unknown level: {raw}"))
                    .into_response()
            }
        },
        None => None,
    };

    let filter = RankingFilter {
        age_range: params.age_range,
        position: params.position,
        level,
        min_points: params.min_points,
        max_points: params.max_points,
    };

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let rankings = match database::rankings::list_ranked(&mut conn) {
        Ok(rows) => rows,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    let items = filter_rankings(&rankings, &filter);
    let total = items.len();

    Json(LeaderboardResponse { items, total }).into_response()
}
