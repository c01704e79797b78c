//! Policy/risk comparison endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use brolly_core::types::{CoverageComparison, RiskProfile};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for comparing a business against a policy.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// Free-text business description.
    pub text: String,
    /// Policy document id to compare against.
    pub policy_name: String,
}

/// Response: detected needs, structured comparison, and narrative verdict.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub needs: RiskProfile,
    pub comparison: CoverageComparison,
    pub explanation: String,
}

/// Compare detected business needs against one policy's coverage.
/// POST /compare
pub async fn compare_policy(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> ApiResult<Json<CompareResponse>> {
    let snapshot = state.snapshot().await.ok_or_else(|| {
        ApiError::bad_request("Knowledge graph not loaded. Upload documents or call /rebuild first.")
    })?;

    if !snapshot.graph.contains_source(&request.policy_name) {
        return Err(ApiError::not_found(format!(
            "Policy '{}' not found",
            request.policy_name
        )));
    }

    let needs = state.engine.precheck(&request.text).await?;
    let comparison = state
        .engine
        .compare(&snapshot, &request.policy_name, &needs);
    let explanation = state
        .engine
        .explain_comparison(&request.policy_name, &needs, &comparison)
        .await?;

    Ok(Json(CompareResponse {
        needs,
        comparison,
        explanation,
    }))
}
