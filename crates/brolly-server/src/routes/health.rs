//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub graph_loaded: bool,
    pub policies: usize,
    pub version: String,
}

/// Health check endpoint.
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let snapshot = state.snapshot().await;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        graph_loaded: snapshot.is_some(),
        policies: snapshot.map(|s| s.graph.sources().len()).unwrap_or(0),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
