//! Admin endpoints: /health

use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// RFC 3339 wall-clock time of the check
    pub timestamp: String,
    pub uptime_secs: u64,
    pub version: &'static str,
    pub dataset_size: usize,
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    tracing::debug!("health check requested");
    Json(HealthResponse {
        status: "OK",
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_secs: state.uptime_secs(),
        version: env!("CARGO_PKG_VERSION"),
        dataset_size: state.access.dataset_size(),
    })
}
