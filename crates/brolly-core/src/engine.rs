//! The policy engine: builds, caches, and queries the knowledge graph.
//!
//! The engine owns the injected LLM capability and the pipeline from raw
//! document text to a published [`GraphSnapshot`]. Snapshots are immutable;
//! a rebuild produces a fresh handle and never touches one already handed
//! out.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::info;

use crate::config::EngineConfig;
use crate::error::BrollyResult;
use crate::explain;
use crate::graph::{self, build_graph, GraphSnapshot, TripletExtractor};
use crate::risk;
use crate::traits::Llm;
use crate::types::{
    BusinessProfile, BusinessRiskAnalysis, CoverageComparison, PolicyProfile, RiskProfile, Triple,
};

/// Orchestrator over extraction, graph assembly, and queries.
pub struct PolicyEngine {
    config: EngineConfig,
    llm: Arc<dyn Llm>,
    extractor: TripletExtractor,
}

impl PolicyEngine {
    /// Create a new engine with an injected LLM backend.
    pub fn new(config: EngineConfig, llm: Arc<dyn Llm>) -> Self {
        let extractor = TripletExtractor::new(llm.clone());
        Self {
            config,
            llm,
            extractor,
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Return the cached snapshot when one exists on disk, else rebuild
    /// from the given documents.
    pub async fn load_or_build(
        &self,
        documents: &BTreeMap<String, String>,
    ) -> BrollyResult<Arc<GraphSnapshot>> {
        let path = self.config.graph_path();
        if path.exists() {
            info!("Loading cached knowledge graph from {}", path.display());
            return Ok(Arc::new(GraphSnapshot::load(&path)?));
        }
        self.rebuild(documents).await
    }

    /// Full rebuild: extract triples per document, assemble the graph,
    /// persist the snapshot, return a fresh handle.
    ///
    /// An LLM failure aborts the whole run (retried externally); no
    /// partially built snapshot is ever published or written.
    pub async fn rebuild(
        &self,
        documents: &BTreeMap<String, String>,
    ) -> BrollyResult<Arc<GraphSnapshot>> {
        let mut triplet_map: BTreeMap<String, Vec<Triple>> = BTreeMap::new();

        for (document_id, text) in documents {
            info!("Extracting triples from {}", document_id);
            let triples = self.extractor.extract(text).await?;
            info!("{}: {} triples", document_id, triples.len());
            triplet_map.insert(document_id.clone(), triples);
        }

        self.save_triplet_artifact(&triplet_map)?;

        let snapshot = GraphSnapshot::new(build_graph(&triplet_map));
        snapshot.save(self.config.graph_path())?;
        info!(
            "Knowledge graph built: {} entities, {} facts",
            snapshot.graph.entity_count(),
            snapshot.graph.fact_count()
        );

        Ok(Arc::new(snapshot))
    }

    // Raw triplet map kept on disk for inspection and reuse.
    fn save_triplet_artifact(&self, triplet_map: &BTreeMap<String, Vec<Triple>>) -> BrollyResult<()> {
        let path = self.config.triplets_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(triplet_map)?)?;
        Ok(())
    }

    /// Structured summary for one policy; `None` when the policy is not in
    /// the graph.
    pub fn summarize(
        &self,
        snapshot: &GraphSnapshot,
        policy_id: &str,
    ) -> Option<PolicyProfile> {
        graph::summarize(&snapshot.graph, policy_id)
    }

    /// Structured summaries for every policy in the graph.
    pub fn summaries(&self, snapshot: &GraphSnapshot) -> HashMap<String, PolicyProfile> {
        graph::build_profiles(&snapshot.graph)
    }

    /// Risk analysis of free-text business description.
    pub async fn precheck(&self, user_text: &str) -> BrollyResult<RiskProfile> {
        risk::policy_precheck(&self.llm, user_text).await
    }

    /// Risk analysis of a structured business intake form.
    pub async fn analyze_business(
        &self,
        profile: &BusinessProfile,
    ) -> BrollyResult<BusinessRiskAnalysis> {
        risk::analyze_business(&self.llm, profile).await
    }

    /// Compare a policy's covered items against a risk profile.
    pub fn compare(
        &self,
        snapshot: &GraphSnapshot,
        policy_id: &str,
        needs: &RiskProfile,
    ) -> CoverageComparison {
        graph::compare(&snapshot.graph, policy_id, needs)
    }

    /// Narrative explanation of one policy's profile.
    pub async fn explain_policy(
        &self,
        snapshot: &GraphSnapshot,
        policy_id: &str,
    ) -> BrollyResult<Option<String>> {
        match self.summarize(snapshot, policy_id) {
            Some(profile) => Ok(Some(
                explain::explain_policy(&self.llm, policy_id, &profile).await?,
            )),
            None => Ok(None),
        }
    }

    /// Narrative explanation of a risk profile.
    pub async fn explain_risk(&self, profile: &RiskProfile) -> BrollyResult<String> {
        explain::explain_risk_profile(&self.llm, profile).await
    }

    /// Narrative verdict on a policy/risk comparison.
    pub async fn explain_comparison(
        &self,
        policy_id: &str,
        needs: &RiskProfile,
        comparison: &CoverageComparison,
    ) -> BrollyResult<String> {
        explain::explain_comparison(&self.llm, policy_id, needs, comparison).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::error::BrollyError;
    use crate::traits::{GenerationOptions, LlmResponse};
    use crate::types::Message;
    use async_trait::async_trait;

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
            Err(BrollyError::llm("unreachable"))
        }

        fn model_name(&self) -> &str {
            "failing"
        }
    }

    fn test_config(dir: &std::path::Path) -> EngineConfig {
        EngineConfig {
            data_dir: dir.to_path_buf(),
            documents_dir: dir.join("pdfs"),
            ..Default::default()
        }
    }

    fn sample_documents() -> BTreeMap<String, String> {
        let mut docs = BTreeMap::new();
        docs.insert(
            "policyA.pdf".to_string(),
            "Policy A covers theft and fire.".to_string(),
        );
        docs
    }

    #[tokio::test]
    async fn test_rebuild_persists_snapshot_and_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let engine = PolicyEngine::new(
            test_config(dir.path()),
            Arc::new(MockLlm {
                reply: "(Policy A, COVERS, Theft)\n(Policy A, COVERS, Fire)".to_string(),
            }),
        );

        let snapshot = engine.rebuild(&sample_documents()).await.unwrap();
        assert_eq!(snapshot.graph.fact_count(), 2);
        assert!(engine.config().graph_path().exists());
        assert!(engine.config().triplets_path().exists());
    }

    #[tokio::test]
    async fn test_load_or_build_uses_cache() {
        let dir = tempfile::tempdir().unwrap();
        let engine = PolicyEngine::new(
            test_config(dir.path()),
            Arc::new(MockLlm {
                reply: "(Policy A, COVERS, Theft)".to_string(),
            }),
        );
        engine.rebuild(&sample_documents()).await.unwrap();

        // A second engine whose LLM always fails must still come up from
        // the cache without issuing a call.
        let cached_engine = PolicyEngine::new(test_config(dir.path()), Arc::new(FailingLlm));
        let snapshot = cached_engine
            .load_or_build(&sample_documents())
            .await
            .unwrap();
        assert_eq!(snapshot.graph.fact_count(), 1);
    }

    #[tokio::test]
    async fn test_rebuild_propagates_llm_failure() {
        let dir = tempfile::tempdir().unwrap();
        let engine = PolicyEngine::new(test_config(dir.path()), Arc::new(FailingLlm));
        let err = engine.rebuild(&sample_documents()).await.unwrap_err();
        assert!(matches!(err, BrollyError::Llm { .. }));
        assert!(!engine.config().graph_path().exists());
    }

    #[tokio::test]
    async fn test_query_passthroughs() {
        let dir = tempfile::tempdir().unwrap();
        let engine = PolicyEngine::new(
            test_config(dir.path()),
            Arc::new(MockLlm {
                reply: "(Policy A, COVERS, Theft)".to_string(),
            }),
        );
        let snapshot = engine.rebuild(&sample_documents()).await.unwrap();

        let profile = engine.summarize(&snapshot, "policyA.pdf").unwrap();
        assert_eq!(profile.coverages.len(), 1);
        assert!(engine.summarize(&snapshot, "other.pdf").is_none());

        let needs = RiskProfile {
            mandatory: vec!["burglary_theft_cover".to_string()],
            ..Default::default()
        };
        let comparison = engine.compare(&snapshot, "policyA.pdf", &needs);
        assert_eq!(comparison.available, vec!["theft"]);
        assert_eq!(
            comparison.mandatory_missing,
            vec!["burglary_theft_cover".to_string()]
        );
    }
}
