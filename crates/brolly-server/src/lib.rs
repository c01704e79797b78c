//! brolly-server - REST API server for brolly.
//!
//! The thin glue over the core engine: endpoints for risk analysis,
//! policy summaries, coverage comparison, and document upload with full
//! graph rebuild.
//!
//! # Example
//!
//! ```ignore
//! use brolly_server::{create_server, factory::create_engine, AppState};
//! use brolly_core::EngineConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = create_engine(EngineConfig::from_env()).unwrap();
//!     let state = AppState::new(engine);
//!     let app = create_server(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod error;
pub mod factory;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use factory::create_engine;
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}
