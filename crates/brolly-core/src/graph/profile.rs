//! Policy profile projection.
//!
//! Groups a policy's graph edges into the five fixed categories via the
//! relation→category table. Rebuilt on every query; a pure projection with
//! no independent identity.

use std::collections::HashMap;

use crate::types::{FactRecord, PolicyProfile, ProfileCategory};

use super::KnowledgeGraph;

/// Build the per-document category projection for every document in the
/// graph.
///
/// Scans every edge once. Each edge's relation is uppercased and looked up
/// in the category table; unmapped relations are dropped from every
/// profile. Any document that contributed an edge gets an entry, even when
/// none of its relations mapped, so "policy found but nothing structured"
/// stays distinguishable from "policy not in graph".
pub fn build_profiles(graph: &KnowledgeGraph) -> HashMap<String, PolicyProfile> {
    let mut profiles: HashMap<String, PolicyProfile> = HashMap::new();

    for fact in graph.facts() {
        let profile = profiles.entry(fact.source.to_string()).or_default();

        let relation = fact.relation.to_uppercase();
        if let Some(category) = ProfileCategory::from_relation(&relation) {
            profile.push(category, FactRecord::new(fact.head, relation, fact.tail));
        }
    }

    profiles
}

/// Structured summary for a single policy, or `None` when the document
/// contributed no edges at all.
pub fn summarize(graph: &KnowledgeGraph, policy_id: &str) -> Option<PolicyProfile> {
    build_profiles(graph).remove(policy_id)
}
