//! Factory for creating LLM backends.

use std::sync::Arc;

use brolly_core::config::LlmProvider;
use brolly_core::error::BrollyResult;
use brolly_core::traits::{Llm, LlmConfig};

use crate::ollama::OllamaLlm;
use crate::openrouter::OpenRouterLlm;

/// Factory for creating LLM backends. Called once at process start; the
/// resulting `Arc<dyn Llm>` is the only handle core code ever sees.
pub struct LlmFactory;

impl LlmFactory {
    /// Create an LLM backend from the given configuration.
    pub fn create(provider: LlmProvider, config: LlmConfig) -> BrollyResult<Arc<dyn Llm>> {
        match provider {
            LlmProvider::OpenRouter => {
                let llm = OpenRouterLlm::new(config)?;
                Ok(Arc::new(llm))
            }
            LlmProvider::Ollama => {
                let llm = OllamaLlm::new(config)?;
                Ok(Arc::new(llm))
            }
        }
    }

    /// Create an OpenRouter backend with default configuration.
    pub fn openrouter() -> BrollyResult<Arc<dyn Llm>> {
        Self::create(LlmProvider::OpenRouter, LlmConfig::default())
    }

    /// Create an OpenRouter backend with a specific model.
    pub fn openrouter_with_model(model: impl Into<String>) -> BrollyResult<Arc<dyn Llm>> {
        let config = LlmConfig {
            model: model.into(),
            ..Default::default()
        };
        Self::create(LlmProvider::OpenRouter, config)
    }

    /// Create an Ollama backend with default configuration.
    pub fn ollama() -> BrollyResult<Arc<dyn Llm>> {
        Self::create(LlmProvider::Ollama, LlmConfig::default())
    }

    /// Create an Ollama backend with a specific model.
    pub fn ollama_with_model(model: impl Into<String>) -> BrollyResult<Arc<dyn Llm>> {
        let config = LlmConfig {
            model: model.into(),
            ..Default::default()
        };
        Self::create(LlmProvider::Ollama, config)
    }
}
