//! Trait definitions for injected capabilities.

mod llm;

pub use llm::{GenerationOptions, Llm, LlmConfig, LlmResponse};
