use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::admin_refresh, players::get_player_challenge_stats, rankings::get_rankings,
    score::post_score, AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/rankings", get(get_rankings))
        .route(
            "/api/players/:player_id/challenges/:challenge_id/stats",
            get(get_player_challenge_stats),
        )
        .route("/api/score", post(post_score))
        .route("/api/admin/refresh", post(admin_refresh))
        .with_state(state)
}
