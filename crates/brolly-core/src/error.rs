//! Error types for brolly operations.
//!
//! Provides a structured error hierarchy with error codes so callers can
//! branch on failure class without string matching.

use thiserror::Error;

/// Result type alias for brolly operations.
pub type BrollyResult<T> = Result<T, BrollyError>;

/// Main error type for all brolly operations.
#[derive(Error, Debug)]
pub enum BrollyError {
    /// LLM operation failed (transport, auth, rate limit). Never retried
    /// by the core; the caller decides.
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Policy or document not found in the graph.
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        code: ErrorCode,
        policy_id: Option<String>,
    },

    /// Knowledge graph operation failed.
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Document extraction failed.
    #[error("Extraction error: {message}")]
    Extraction {
        message: String,
        code: ErrorCode,
    },

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        code: ErrorCode,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider not supported.
    #[error("Provider not supported: {provider}")]
    UnsupportedProvider { provider: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // LLM (LLM_xxx)
    LlmConnectionFailed,
    LlmGenerationFailed,
    LlmInvalidResponse,

    // Lookup (POL_xxx)
    PolicyNotFound,

    // Graph (GRP_xxx)
    GrpBuildFailed,
    GrpCacheInvalid,

    // Extraction (EXT_xxx)
    ExtUnreadableDocument,

    // Parse (PARSE_xxx)
    ParseInvalidJson,
    ParseInvalidTriple,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::LlmConnectionFailed => "LLM_001",
            ErrorCode::LlmGenerationFailed => "LLM_002",
            ErrorCode::LlmInvalidResponse => "LLM_003",
            ErrorCode::PolicyNotFound => "POL_001",
            ErrorCode::GrpBuildFailed => "GRP_001",
            ErrorCode::GrpCacheInvalid => "GRP_002",
            ErrorCode::ExtUnreadableDocument => "EXT_001",
            ErrorCode::ParseInvalidJson => "PARSE_001",
            ErrorCode::ParseInvalidTriple => "PARSE_002",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl BrollyError {
    /// Create an LLM error.
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            code: ErrorCode::LlmGenerationFailed,
            source: None,
        }
    }

    /// Create a not found error for a policy id.
    pub fn not_found(policy_id: impl Into<String>) -> Self {
        let id = policy_id.into();
        Self::NotFound {
            message: format!("Policy '{}' not found in the knowledge graph", id),
            code: ErrorCode::PolicyNotFound,
            policy_id: Some(id),
        }
    }

    /// Create a graph error.
    pub fn graph(message: impl Into<String>) -> Self {
        Self::Graph {
            message: message.into(),
            code: ErrorCode::GrpBuildFailed,
            source: None,
        }
    }

    /// Create an extraction error.
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
            code: ErrorCode::ExtUnreadableDocument,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            code: ErrorCode::ParseInvalidJson,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Llm { code, .. } => *code,
            Self::NotFound { code, .. } => *code,
            Self::Graph { code, .. } => *code,
            Self::Extraction { code, .. } => *code,
            Self::Parse { code, .. } => *code,
            _ => ErrorCode::Internal,
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Llm { .. } => Some("Please check your LLM provider configuration and API key"),
            Self::NotFound { .. } => {
                Some("Please check the policy name against the loaded documents")
            }
            Self::Graph { .. } => {
                Some("Delete the cached graph file to force a rebuild from documents")
            }
            Self::Configuration(_) => Some("Please check your brolly configuration"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error() {
        let err = BrollyError::llm("connection refused");
        assert_eq!(err.code(), ErrorCode::LlmGenerationFailed);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_not_found_error() {
        let err = BrollyError::not_found("policyA.pdf");
        assert_eq!(err.code(), ErrorCode::PolicyNotFound);
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::LlmGenerationFailed.as_str(), "LLM_002");
        assert_eq!(ErrorCode::PolicyNotFound.as_str(), "POL_001");
    }
}
