//! LLM-based triplet extraction.
//!
//! One LLM request per document with a fixed instruction prompt, then a
//! permissive pattern match over the free-text response. There is no
//! semantic validation: relations outside the prompted vocabulary are
//! accepted and simply never map to a profile category downstream.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BrollyResult;
use crate::traits::{GenerationOptions, Llm};
use crate::types::{Message, Triple};

static TRIPLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^,]+),\s*([^,]+),\s*([^)]+)\)").unwrap());

/// LLM-backed triplet extractor.
pub struct TripletExtractor {
    llm: Arc<dyn Llm>,
}

impl TripletExtractor {
    /// Create a new triplet extractor.
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }

    /// Extract fact triples from one document's text.
    ///
    /// LLM transport failures propagate to the caller; extraction for the
    /// document aborts and the pipeline run is retried externally.
    pub async fn extract(&self, text: &str) -> BrollyResult<Vec<Triple>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let messages = vec![Message::user(Self::prompt(text))];

        let options = GenerationOptions {
            temperature: Some(0.0),
            ..Default::default()
        };

        let response = self.llm.generate(&messages, Some(options)).await?;
        Ok(parse_triplets(response.content_or_empty()))
    }

    fn prompt(text: &str) -> String {
        format!(
            r#"Extract insurance knowledge as triples.

Format STRICTLY:
(HEAD, RELATION, TAIL)

Relations ONLY:
COVERS, EXCLUDES, LIMIT, CONDITION, DEFINITION

Text:
{}"#,
            text
        )
    }
}

/// Parse an LLM response into triples.
///
/// Any substring shaped like `(A, B, C)` where A and B contain no comma
/// and C no closing paren is accepted; all three captures are trimmed.
/// Text not matching the shape contributes nothing. An empty result is
/// valid, not an error.
pub fn parse_triplets(raw: &str) -> Vec<Triple> {
    TRIPLE_PATTERN
        .captures_iter(raw)
        .map(|caps| {
            Triple::new(
                caps[1].trim(),
                caps[2].trim(),
                caps[3].trim(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::LlmResponse;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockLlm {
        reply: String,
    }

    #[async_trait]
    impl Llm for MockLlm {
        async fn generate(
            &self,
            _: &[Message],
            _: Option<GenerationOptions>,
        ) -> BrollyResult<LlmResponse> {
            Ok(LlmResponse {
                content: Some(self.reply.clone()),
            })
        }

        fn model_name(&self) -> &str {
            "mock"
        }
    }

    struct FailingLlm;

    #[async_trait]
    impl Llm for FailingLlm {
        async fn generate(
            &self,
            _: &[Message],
            _: Option<GenerationOptions>,
        ) -> BrollyResult<LlmResponse> {
            Err(crate::error::BrollyError::llm("connection refused"))
        }

        fn model_name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_parse_basic_lines() {
        let raw = "(Policy A, COVERS, Theft)\n(Policy A, LIMIT, 50000 EUR)";
        let triples = parse_triplets(raw);
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0], Triple::new("Policy A", "COVERS", "Theft"));
        assert_eq!(triples[1], Triple::new("Policy A", "LIMIT", "50000 EUR"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let triples = parse_triplets("(  Policy A ,  COVERS ,  Theft  )");
        assert_eq!(triples[0], Triple::new("Policy A", "COVERS", "Theft"));
    }

    #[test]
    fn test_parse_ignores_prose() {
        let raw = "Here are the extracted facts:\n(Shop, INSURED, Contents)\nHope this helps!";
        let triples = parse_triplets(raw);
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].relation, "INSURED");
    }

    #[test]
    fn test_parse_no_matches_is_empty() {
        assert!(parse_triplets("no triples here").is_empty());
        assert!(parse_triplets("").is_empty());
        assert!(parse_triplets("(missing, parts").is_empty());
    }

    #[test]
    fn test_parse_accepts_unknown_relations() {
        let triples = parse_triplets("(Policy A, FOO, Bar)");
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].relation, "FOO");
    }

    #[test]
    fn test_parsed_fields_are_non_empty() {
        let raw = "(a, b, c)\nnoise\n(x, y, z)";
        for triple in parse_triplets(raw) {
            assert!(!triple.head.trim().is_empty());
            assert!(!triple.relation.trim().is_empty());
            assert!(!triple.tail.trim().is_empty());
        }
    }

    #[tokio::test]
    async fn test_extract_empty_input_skips_llm() {
        let extractor = TripletExtractor::new(Arc::new(FailingLlm));
        let triples = extractor.extract("   ").await.unwrap();
        assert!(triples.is_empty());
    }

    #[tokio::test]
    async fn test_extract_parses_reply() {
        let extractor = TripletExtractor::new(Arc::new(MockLlm {
            reply: "(Policy A, COVERS, Fire)".to_string(),
        }));
        let triples = extractor.extract("some policy text").await.unwrap();
        assert_eq!(triples, vec![Triple::new("Policy A", "COVERS", "Fire")]);
    }

    #[tokio::test]
    async fn test_extract_propagates_llm_failure() {
        let extractor = TripletExtractor::new(Arc::new(FailingLlm));
        let err = extractor.extract("some policy text").await.unwrap_err();
        assert!(matches!(err, crate::error::BrollyError::Llm { .. }));
    }
}
