//! LLM trait and related types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BrollyResult;
use crate::types::Message;

/// Response from LLM generation.
#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    /// Generated text content.
    pub content: Option<String>,
}

impl LlmResponse {
    /// Get the content or an empty string.
    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// Configuration options for a single generation call.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
}

/// Core LLM trait - both backends implement this.
///
/// The core is backend-agnostic: it takes an `Arc<dyn Llm>` once at
/// construction and never inspects which provider is behind it.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Generate a response from the LLM. One blocking round trip; transport
    /// failures surface as `BrollyError::Llm` and are never retried here.
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> BrollyResult<LlmResponse>;

    /// Get the model name.
    fn model_name(&self) -> &str;
}

/// LLM configuration shared by both backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model name/identifier.
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key (if not using environment variable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL for the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_temperature() -> f32 {
    0.4
}

fn default_max_tokens() -> u32 {
    500
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}
