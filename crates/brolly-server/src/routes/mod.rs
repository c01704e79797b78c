//! Route definitions for the REST API.

mod compare;
mod documents;
mod health;
mod policies;
mod risk;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Risk analysis
        .route("/risk", post(risk::detect_risk))
        .route("/risk/explain", post(risk::explain_risk))
        .route("/business/analyze", post(risk::analyze_business))
        // Policy summaries
        .route("/summaries", get(policies::get_summaries))
        .route("/policies/:id/summary", get(policies::get_policy_summary))
        .route("/policies/:id/explain", get(policies::explain_policy))
        // Coverage comparison
        .route("/compare", post(compare::compare_policy))
        // Documents and graph lifecycle
        .route("/documents", post(documents::upload_documents))
        .route("/rebuild", post(documents::rebuild))
        // Attach state
        .with_state(state)
}

pub use compare::*;
pub use documents::*;
pub use health::*;
pub use policies::*;
pub use risk::*;
