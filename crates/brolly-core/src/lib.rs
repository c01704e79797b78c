//! brolly-core - Core library for brolly.
//!
//! This crate provides the types, traits, knowledge graph, and engine for
//! the brolly insurance coverage analyzer: triplet extraction from policy
//! documents, graph assembly, policy profile projection, risk
//! classification, and coverage matching.
//!
//! # Example
//!
//! ```ignore
//! use brolly_core::{EngineConfig, PolicyEngine};
//!
//! let engine = PolicyEngine::new(EngineConfig::from_env(), llm);
//!
//! // Build or load the knowledge graph
//! let snapshot = engine.load_or_build(&documents).await?;
//!
//! // Summarize one policy
//! let profile = engine.summarize(&snapshot, "policyA.pdf");
//!
//! // Match a business description against the policy
//! let needs = engine.precheck("I run a sneaker store, theft worries me").await?;
//! let comparison = engine.compare(&snapshot, "policyA.pdf", &needs);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod explain;
pub mod graph;
pub mod risk;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{EngineConfig, LlmProvider, LlmProviderConfig};
pub use engine::PolicyEngine;
pub use error::{BrollyError, BrollyResult};
pub use graph::{build_graph, GraphSnapshot, KnowledgeGraph, TripletExtractor};
pub use traits::{GenerationOptions, Llm, LlmConfig, LlmResponse};
pub use types::{
    BusinessProfile, BusinessRiskAnalysis, CoverageComparison, FactRecord, Message, MessageRole,
    PolicyProfile, ProfileCategory, RiskBreakdown, RiskCategory, RiskProfile, Triple,
};
