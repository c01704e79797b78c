//! brolly-llm - LLM backend implementations for brolly.
//!
//! Two interchangeable backends behind the single-method `Llm` capability:
//!
//! - **OpenRouter** - hosted chat-completions API
//! - **Ollama** - local models served by Ollama
//!
//! The backend is selected once at process start; core code takes the
//! resulting `Arc<dyn Llm>` and never branches on which one is active.
//!
//! # Example
//!
//! ```ignore
//! use brolly_llm::LlmFactory;
//!
//! // Hosted backend
//! let llm = LlmFactory::openrouter()?;
//!
//! // Or a local model
//! let llm = LlmFactory::ollama_with_model("qwen3:0.6b")?;
//! ```

mod factory;
mod ollama;
mod openrouter;

pub use factory::LlmFactory;
pub use ollama::OllamaLlm;
pub use openrouter::OpenRouterLlm;

// Re-export core types for convenience
pub use brolly_core::config::LlmProvider;
pub use brolly_core::traits::{GenerationOptions, Llm, LlmConfig, LlmResponse};
