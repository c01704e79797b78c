//! The knowledge graph: a directed multigraph of entity strings connected
//! by relation-labeled, source-tagged edges.
//!
//! Nodes are the raw head/tail strings from extraction, not normalized;
//! two differently-worded mentions of the same concept are distinct nodes.
//! Edges carry no uniqueness constraint, so duplicate facts coexist.

mod extractor;
mod matcher;
mod profile;
mod snapshot;

pub use extractor::{parse_triplets, TripletExtractor};
pub use matcher::{compare, covered_items};
pub use profile::{build_profiles, summarize};
pub use snapshot::GraphSnapshot;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::types::Triple;

/// Edge data: the raw extracted relation plus the originating document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactEdge {
    /// Relation string as extracted (case preserved; uppercased at
    /// consumption time).
    pub relation: String,
    /// Identifier of the document this fact came from.
    pub source: String,
}

/// A borrowed view of one fact edge with its endpoint entities.
#[derive(Debug, Clone, Copy)]
pub struct Fact<'a> {
    pub head: &'a str,
    pub relation: &'a str,
    pub tail: &'a str,
    pub source: &'a str,
}

/// Directed multigraph over free-text entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    graph: DiGraph<String, FactEdge>,
    name_index: HashMap<String, NodeIndex>,
}

impl KnowledgeGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn entity_index(&mut self, name: &str) -> NodeIndex {
        if let Some(idx) = self.name_index.get(name) {
            return *idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.name_index.insert(name.to_string(), idx);
        idx
    }

    /// Add one fact edge head→tail. Entities dedup by exact string;
    /// edges never dedup.
    pub fn add_fact(&mut self, head: &str, relation: &str, tail: &str, source: &str) {
        let h = self.entity_index(head);
        let t = self.entity_index(tail);
        self.graph.add_edge(
            h,
            t,
            FactEdge {
                relation: relation.to_string(),
                source: source.to_string(),
            },
        );
    }

    /// Iterate every fact edge in insertion order.
    pub fn facts(&self) -> impl Iterator<Item = Fact<'_>> {
        self.graph.edge_references().map(|e| Fact {
            head: self.graph[e.source()].as_str(),
            relation: e.weight().relation.as_str(),
            tail: self.graph[e.target()].as_str(),
            source: e.weight().source.as_str(),
        })
    }

    /// Sorted set of every document that contributed at least one edge.
    pub fn sources(&self) -> BTreeSet<String> {
        self.graph
            .edge_references()
            .map(|e| e.weight().source.clone())
            .collect()
    }

    /// Whether the given document contributed any edge.
    pub fn contains_source(&self, document_id: &str) -> bool {
        self.graph
            .edge_references()
            .any(|e| e.weight().source == document_id)
    }

    /// Number of entity nodes.
    pub fn entity_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of fact edges.
    pub fn fact_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph holds no facts.
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }
}

/// Fold per-document triple lists into a single graph.
///
/// Pure and deterministic: documents in map order, triples in list order.
/// No dedup, no normalization; edge order has no semantic effect on
/// downstream queries.
pub fn build_graph(triplet_map: &BTreeMap<String, Vec<Triple>>) -> KnowledgeGraph {
    let mut graph = KnowledgeGraph::new();
    for (source, triples) in triplet_map {
        for triple in triples {
            graph.add_fact(&triple.head, &triple.relation, &triple.tail, source);
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> BTreeMap<String, Vec<Triple>> {
        let mut map = BTreeMap::new();
        map.insert(
            "policyA.pdf".to_string(),
            vec![
                Triple::new("Policy A", "COVERS", "Theft"),
                Triple::new("Policy A", "EXCLUDES", "War"),
            ],
        );
        map.insert(
            "policyB.pdf".to_string(),
            vec![Triple::new("Policy B", "COVERS", "Fire")],
        );
        map
    }

    #[test]
    fn test_build_graph_counts() {
        let graph = build_graph(&sample_map());
        assert_eq!(graph.fact_count(), 3);
        // "Policy A", "Theft", "War", "Policy B", "Fire"
        assert_eq!(graph.entity_count(), 5);
    }

    #[test]
    fn test_duplicate_facts_coexist() {
        let mut graph = KnowledgeGraph::new();
        graph.add_fact("Policy A", "COVERS", "Theft", "policyA.pdf");
        graph.add_fact("Policy A", "COVERS", "Theft", "policyA.pdf");
        assert_eq!(graph.fact_count(), 2);
        assert_eq!(graph.entity_count(), 2);
    }

    #[test]
    fn test_sources() {
        let graph = build_graph(&sample_map());
        let sources: Vec<_> = graph.sources().into_iter().collect();
        assert_eq!(sources, vec!["policyA.pdf", "policyB.pdf"]);
        assert!(graph.contains_source("policyA.pdf"));
        assert!(!graph.contains_source("policyC.pdf"));
    }

    #[test]
    fn test_distinct_wordings_are_distinct_nodes() {
        let mut graph = KnowledgeGraph::new();
        graph.add_fact("Policy A", "COVERS", "theft", "a.pdf");
        graph.add_fact("Policy A", "COVERS", "Theft", "a.pdf");
        assert_eq!(graph.entity_count(), 3);
    }

    #[test]
    fn test_serde_roundtrip() {
        let graph = build_graph(&sample_map());
        let json = serde_json::to_string(&graph).unwrap();
        let parsed: KnowledgeGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.fact_count(), graph.fact_count());
        assert_eq!(parsed.sources(), graph.sources());
    }
}
