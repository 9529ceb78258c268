use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::services::processing::ProcessingService;

use super::AppState;

pub async fn admin_refresh(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let auth_header = headers.get("Authorization").and_then(|h| h.to_str().ok());
    if auth_header != Some("Bearer secret") {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    tokio::spawn(async move {
        log::info!("Admin triggered ranking recomputation");
        let service = ProcessingService::new(state.config.clone());
        if let Err(e) = service.run() {
            log::error!("Ranking recomputation failed: {:?}", e);
            return;
        }
        log::info!("Admin triggered recomputation completed successfully");
    });

    (StatusCode::ACCEPTED, "Recomputation triggered").into_response()
}
