//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during document extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// File extension is not supported by any extractor.
    #[error("Unsupported document type: {0}")]
    UnsupportedType(String),

    /// Extraction process failed.
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// Extracted content is empty.
    #[error("Empty content extracted")]
    EmptyContent,

    /// IO error during extraction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF-specific extraction error.
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// Task join error from spawn_blocking.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
