//! PDF text extraction using pdf-extract.

use crate::error::{ExtractError, ExtractResult};
use crate::Extractor;
use async_trait::async_trait;

/// PDF text extractor.
///
/// Wraps synchronous pdf-extract calls in spawn_blocking to avoid
/// blocking the async runtime.
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    /// Minimum text length to consider extraction successful
    /// (helps detect image-only PDFs that would need OCR).
    min_text_length: usize,
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor {
    /// Create new PDF extractor with default settings.
    pub fn new() -> Self {
        Self {
            min_text_length: 10,
        }
    }

    /// Create PDF extractor with custom minimum text threshold.
    pub fn with_min_text_length(min_text_length: usize) -> Self {
        Self { min_text_length }
    }
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<String> {
        let bytes = content.to_vec();
        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes)
                .map_err(|e| ExtractError::Pdf(e.to_string()))
        })
        .await??;

        if text.trim().len() < self.min_text_length {
            return Err(ExtractError::EmptyContent);
        }

        Ok(text)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}
