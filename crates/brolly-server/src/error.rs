//! Error handling for the REST API server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

// Convert from brolly-core errors
impl From<brolly_core::error::BrollyError> for ApiError {
    fn from(err: brolly_core::error::BrollyError) -> Self {
        use brolly_core::error::BrollyError;

        match err {
            BrollyError::Configuration(msg) => ApiError::bad_request(msg),
            BrollyError::NotFound { message, .. } => ApiError::not_found(message),
            BrollyError::Llm { message, .. } => {
                ApiError::upstream(format!("LLM error: {}", message))
            }
            BrollyError::Graph { message, .. } => {
                ApiError::internal(format!("Graph error: {}", message))
            }
            BrollyError::Extraction { message, .. } => {
                ApiError::internal(format!("Extraction error: {}", message))
            }
            BrollyError::Parse { message, .. } => {
                ApiError::internal(format!("Parse error: {}", message))
            }
            BrollyError::UnsupportedProvider { provider } => {
                ApiError::bad_request(format!("Unsupported provider: {}", provider))
            }
            BrollyError::Serialization(e) => {
                ApiError::internal(format!("Serialization error: {}", e))
            }
            BrollyError::Io(e) => ApiError::internal(format!("IO error: {}", e)),
            BrollyError::Internal(msg) => ApiError::internal(msg),
        }
    }
}

impl From<brolly_extractors::ExtractError> for ApiError {
    fn from(err: brolly_extractors::ExtractError) -> Self {
        ApiError::internal(format!("Extraction error: {}", err))
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
