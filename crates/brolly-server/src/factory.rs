//! Engine construction from configuration.

use brolly_core::config::EngineConfig;
use brolly_core::engine::PolicyEngine;
use brolly_core::error::BrollyResult;
use brolly_llm::LlmFactory;

/// Create a policy engine from the given configuration.
///
/// The LLM backend is selected here, exactly once; everything downstream
/// is backend-agnostic.
pub fn create_engine(config: EngineConfig) -> BrollyResult<PolicyEngine> {
    let llm = LlmFactory::create(config.llm.provider, config.llm.config.clone())?;
    Ok(PolicyEngine::new(config, llm))
}
