//! Plain-text passthrough extraction.

use crate::error::{ExtractError, ExtractResult};
use crate::Extractor;
use async_trait::async_trait;

/// Passthrough extractor for plain-text documents. Useful for tests and
/// for corpora that mix pre-extracted text with PDFs.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor;

impl TextExtractor {
    /// Create a new text extractor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Extractor for TextExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<String> {
        let text = String::from_utf8(content.to_vec())
            .map_err(|e| ExtractError::ExtractionFailed(format!("Invalid UTF-8: {}", e)))?;

        if text.trim().is_empty() {
            return Err(ExtractError::EmptyContent);
        }

        Ok(text)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["txt", "md"]
    }

    fn name(&self) -> &str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passthrough() {
        let extractor = TextExtractor::new();
        let text = extractor.extract(b"Policy A covers theft.").await.unwrap();
        assert_eq!(text, "Policy A covers theft.");
    }

    #[tokio::test]
    async fn test_empty_content_rejected() {
        let extractor = TextExtractor::new();
        let err = extractor.extract(b"   \n").await.unwrap_err();
        assert!(matches!(err, ExtractError::EmptyContent));
    }

    #[tokio::test]
    async fn test_invalid_utf8_rejected() {
        let extractor = TextExtractor::new();
        let err = extractor.extract(&[0xff, 0xfe, 0x00]).await.unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed(_)));
    }
}
