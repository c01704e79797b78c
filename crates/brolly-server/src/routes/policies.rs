//! Policy summary endpoints.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use brolly_core::types::PolicyProfile;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

fn graph_not_loaded() -> ApiError {
    ApiError::bad_request("Knowledge graph not loaded. Upload documents or call /rebuild first.")
}

/// Structured summaries for every known policy.
/// GET /summaries
pub async fn get_summaries(
    State(state): State<AppState>,
) -> ApiResult<Json<HashMap<String, PolicyProfile>>> {
    let snapshot = state.snapshot().await.ok_or_else(graph_not_loaded)?;
    Ok(Json(state.engine.summaries(&snapshot)))
}

/// Structured summary for one policy.
/// GET /policies/:id/summary
pub async fn get_policy_summary(
    State(state): State<AppState>,
    Path(policy_id): Path<String>,
) -> ApiResult<Json<PolicyProfile>> {
    let snapshot = state.snapshot().await.ok_or_else(graph_not_loaded)?;

    state
        .engine
        .summarize(&snapshot, &policy_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Policy '{}' not found", policy_id)))
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub policy: String,
    pub explanation: String,
}

/// Narrative explanation of one policy.
/// GET /policies/:id/explain
pub async fn explain_policy(
    State(state): State<AppState>,
    Path(policy_id): Path<String>,
) -> ApiResult<Json<ExplainResponse>> {
    let snapshot = state.snapshot().await.ok_or_else(graph_not_loaded)?;

    let explanation = state
        .engine
        .explain_policy(&snapshot, &policy_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Policy '{}' not found", policy_id)))?;

    Ok(Json(ExplainResponse {
        policy: policy_id,
        explanation,
    }))
}
