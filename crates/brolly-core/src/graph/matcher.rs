//! Coverage matching against a risk profile.
//!
//! Matching is exact-string after normalization: a coverage code like
//! `public_liability` matches only a covered tail literally equal to
//! "public liability" (case-insensitive). Paraphrases are missed; this is
//! the documented contract, not a bug.

use std::collections::BTreeSet;

use crate::types::{CoverageComparison, ProfileCategory, RiskProfile};

use super::KnowledgeGraph;

/// Set of normalized items the policy actually covers.
///
/// Scans edges sourced from `policy_id` whose uppercased relation is a
/// coverage relation (COVERS, INCLUDES, INSURED, APPLIES_TO) and collects
/// the lowercased, trimmed tail of each.
pub fn covered_items(graph: &KnowledgeGraph, policy_id: &str) -> BTreeSet<String> {
    graph
        .facts()
        .filter(|f| f.source == policy_id)
        .filter(|f| ProfileCategory::is_coverage_relation(f.relation))
        .map(|f| f.tail.to_lowercase().trim().to_string())
        .collect()
}

/// Partition the risk profile's requirement lists by presence in the
/// policy's covered-items set.
pub fn compare(
    graph: &KnowledgeGraph,
    policy_id: &str,
    needs: &RiskProfile,
) -> CoverageComparison {
    let available = covered_items(graph, policy_id);

    let partition = |items: &[String]| {
        let mut covered = Vec::new();
        let mut missing = Vec::new();
        for item in items {
            if available.contains(&item.replace('_', " ")) {
                covered.push(item.clone());
            } else {
                missing.push(item.clone());
            }
        }
        (covered, missing)
    };

    let (mandatory_covered, mandatory_missing) = partition(&needs.mandatory);
    let (optional_covered, optional_missing) = partition(&needs.optional);

    CoverageComparison {
        available: available.into_iter().collect(),
        mandatory_covered,
        mandatory_missing,
        optional_covered,
        optional_missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::types::Triple;
    use std::collections::BTreeMap;

    fn graph_with(source: &str, triples: Vec<Triple>) -> KnowledgeGraph {
        let mut map = BTreeMap::new();
        map.insert(source.to_string(), triples);
        build_graph(&map)
    }

    fn needs(mandatory: &[&str], optional: &[&str]) -> RiskProfile {
        RiskProfile {
            risks: Default::default(),
            mandatory: mandatory.iter().map(|s| s.to_string()).collect(),
            optional: optional.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_covered_items_normalizes_tails() {
        let graph = graph_with(
            "policyA.pdf",
            vec![
                Triple::new("Policy A", "COVERS", "Cyber Insurance"),
                Triple::new("Policy A", "INCLUDES", "cyber insurance "),
                Triple::new("Policy A", "EXCLUDES", "Flood"),
            ],
        );

        let covered = covered_items(&graph, "policyA.pdf");
        assert_eq!(covered.len(), 1);
        assert!(covered.contains("cyber insurance"));
    }

    #[test]
    fn test_covered_items_respects_source() {
        let mut map = BTreeMap::new();
        map.insert(
            "policyA.pdf".to_string(),
            vec![Triple::new("A", "COVERS", "Theft")],
        );
        map.insert(
            "policyB.pdf".to_string(),
            vec![Triple::new("B", "COVERS", "Fire")],
        );
        let graph = build_graph(&map);

        let covered = covered_items(&graph, "policyA.pdf");
        assert!(covered.contains("theft"));
        assert!(!covered.contains("fire"));
    }

    #[test]
    fn test_underscore_normalization_matches() {
        let graph = graph_with(
            "policyA.pdf",
            vec![Triple::new("Policy A", "COVERS", "Cyber Insurance")],
        );

        let comparison = compare(&graph, "policyA.pdf", &needs(&["cyber_insurance"], &[]));
        assert_eq!(comparison.mandatory_covered, vec!["cyber_insurance"]);
        assert!(comparison.mandatory_missing.is_empty());
        assert!(comparison.fully_covered());
    }

    #[test]
    fn test_vocabulary_mismatch_is_missing() {
        // The graph covers "Theft" but the rule code expands to
        // "burglary theft cover"; exact matching reports it missing.
        let graph = graph_with(
            "policyA.pdf",
            vec![Triple::new("Policy A", "COVERS", "Theft")],
        );

        let comparison = compare(&graph, "policyA.pdf", &needs(&["burglary_theft_cover"], &[]));
        assert_eq!(comparison.available, vec!["theft"]);
        assert_eq!(comparison.mandatory_missing, vec!["burglary_theft_cover"]);
        assert!(comparison.mandatory_covered.is_empty());
    }

    #[test]
    fn test_optional_partition() {
        let graph = graph_with(
            "policyA.pdf",
            vec![Triple::new("Policy A", "APPLIES_TO", "Machinery Breakdown")],
        );

        let comparison = compare(
            &graph,
            "policyA.pdf",
            &needs(&[], &["machinery_breakdown", "catastrophe_addon"]),
        );
        assert_eq!(comparison.optional_covered, vec!["machinery_breakdown"]);
        assert_eq!(comparison.optional_missing, vec!["catastrophe_addon"]);
    }

    #[test]
    fn test_unknown_policy_has_nothing_available() {
        let graph = graph_with(
            "policyA.pdf",
            vec![Triple::new("Policy A", "COVERS", "Theft")],
        );

        let comparison = compare(&graph, "policyZ.pdf", &needs(&["property_fire_cover"], &[]));
        assert!(comparison.available.is_empty());
        assert_eq!(comparison.mandatory_missing, vec!["property_fire_cover"]);
    }
}
