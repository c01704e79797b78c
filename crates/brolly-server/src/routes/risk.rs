//! Risk analysis endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use brolly_core::types::{BusinessProfile, BusinessRiskAnalysis, RiskProfile};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for risk detection.
#[derive(Debug, Deserialize)]
pub struct RiskRequest {
    /// Free-text business description.
    pub text: String,
}

/// Detect business risks and derive coverage requirements.
/// POST /risk
///
/// Malformed classifier output never fails this endpoint; it degrades to
/// the empty five-category structure. Only LLM transport failures error.
pub async fn detect_risk(
    State(state): State<AppState>,
    Json(request): Json<RiskRequest>,
) -> ApiResult<Json<RiskProfile>> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("text must not be empty"));
    }

    let profile = state.engine.precheck(&request.text).await?;
    Ok(Json(profile))
}

/// Response: detected risk profile plus a narrative explanation.
#[derive(Debug, Serialize)]
pub struct RiskExplanationResponse {
    pub profile: RiskProfile,
    pub explanation: String,
}

/// Detect risks and explain them in plain language.
/// POST /risk/explain
pub async fn explain_risk(
    State(state): State<AppState>,
    Json(request): Json<RiskRequest>,
) -> ApiResult<Json<RiskExplanationResponse>> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("text must not be empty"));
    }

    let profile = state.engine.precheck(&request.text).await?;
    let explanation = state.engine.explain_risk(&profile).await?;

    Ok(Json(RiskExplanationResponse {
        profile,
        explanation,
    }))
}

/// Risk analysis of a structured business intake form.
/// POST /business/analyze
pub async fn analyze_business(
    State(state): State<AppState>,
    Json(profile): Json<BusinessProfile>,
) -> ApiResult<Json<BusinessRiskAnalysis>> {
    let analysis = state.engine.analyze_business(&profile).await?;
    Ok(Json(analysis))
}
