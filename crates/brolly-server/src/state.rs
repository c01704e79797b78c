//! Server state management.
//!
//! The active graph snapshot lives behind a single writer/many reader
//! indirection: readers clone the inner `Arc` and drop the lock, a rebuild
//! publishes a brand-new handle. Snapshots themselves are never mutated.

use std::sync::Arc;

use brolly_core::engine::PolicyEngine;
use brolly_core::graph::GraphSnapshot;
use tokio::sync::RwLock;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PolicyEngine>,
    snapshot: Arc<RwLock<Option<Arc<GraphSnapshot>>>>,
}

impl AppState {
    /// Create application state around a configured engine, with no graph
    /// loaded yet.
    pub fn new(engine: PolicyEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            snapshot: Arc::new(RwLock::new(None)),
        }
    }

    /// Whether a graph snapshot is currently published.
    pub async fn is_loaded(&self) -> bool {
        self.snapshot.read().await.is_some()
    }

    /// Get the active snapshot handle, if any.
    pub async fn snapshot(&self) -> Option<Arc<GraphSnapshot>> {
        self.snapshot.read().await.clone()
    }

    /// Atomically republish the active snapshot.
    pub async fn publish(&self, snapshot: Arc<GraphSnapshot>) {
        *self.snapshot.write().await = Some(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brolly_core::config::EngineConfig;
    use brolly_core::error::BrollyResult;
    use brolly_core::graph::KnowledgeGraph;
    use brolly_core::traits::{GenerationOptions, Llm, LlmResponse};
    use brolly_core::types::Message;
    use async_trait::async_trait;

    struct NullLlm;

    #[async_trait]
    impl Llm for NullLlm {
        async fn generate(
            &self,
            _: &[Message],
            _: Option<GenerationOptions>,
        ) -> BrollyResult<LlmResponse> {
            Ok(LlmResponse::default())
        }

        fn model_name(&self) -> &str {
            "null"
        }
    }

    #[tokio::test]
    async fn test_publish_swaps_handle() {
        let state = AppState::new(PolicyEngine::new(
            EngineConfig::default(),
            Arc::new(NullLlm),
        ));
        assert!(!state.is_loaded().await);
        assert!(state.snapshot().await.is_none());

        let first = Arc::new(GraphSnapshot::new(KnowledgeGraph::new()));
        state.publish(first.clone()).await;
        assert!(state.is_loaded().await);

        // A held reader handle survives a republish untouched.
        let held = state.snapshot().await.unwrap();
        let second = Arc::new(GraphSnapshot::new(KnowledgeGraph::new()));
        state.publish(second.clone()).await;

        assert!(Arc::ptr_eq(&held, &first));
        assert!(Arc::ptr_eq(&state.snapshot().await.unwrap(), &second));
    }
}
