//! Profile and risk category enumerations.

use serde::{Deserialize, Serialize};

/// The five fixed sections of a policy profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileCategory {
    Coverages,
    Exclusions,
    Limits,
    Conditions,
    Definitions,
}

impl ProfileCategory {
    /// All categories, in display order.
    pub fn all() -> &'static [ProfileCategory] {
        &[
            ProfileCategory::Coverages,
            ProfileCategory::Exclusions,
            ProfileCategory::Limits,
            ProfileCategory::Conditions,
            ProfileCategory::Definitions,
        ]
    }

    /// Get the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileCategory::Coverages => "Coverages",
            ProfileCategory::Exclusions => "Exclusions",
            ProfileCategory::Limits => "Limits",
            ProfileCategory::Conditions => "Conditions",
            ProfileCategory::Definitions => "Definitions",
        }
    }

    /// Map an extracted relation string into a category.
    ///
    /// Matching is case-insensitive. Relations outside the table return
    /// `None` and are excluded from every profile; extractors routinely
    /// emit relations beyond the prompted vocabulary.
    pub fn from_relation(relation: &str) -> Option<Self> {
        match relation.trim().to_uppercase().as_str() {
            "COVERS" | "INCLUDES" | "INSURED" | "APPLIES_TO" => Some(ProfileCategory::Coverages),
            "EXCLUDES" | "EXCLUDED_FROM" => Some(ProfileCategory::Exclusions),
            "LIMIT" | "SUM_INSURED" => Some(ProfileCategory::Limits),
            "REQUIRES" | "MUST" | "OBLIGATION" => Some(ProfileCategory::Conditions),
            "DEFINED_AS" | "DEFINED_IN" => Some(ProfileCategory::Definitions),
            _ => None,
        }
    }

    /// Whether the relation marks an item as actually covered.
    pub fn is_coverage_relation(relation: &str) -> bool {
        matches!(
            Self::from_relation(relation),
            Some(ProfileCategory::Coverages)
        )
    }
}

/// The five fixed business-risk buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Physical,
    Liability,
    Operational,
    People,
    IndustrySpecific,
}

impl RiskCategory {
    /// All risk categories, in prompt order.
    pub fn all() -> &'static [RiskCategory] {
        &[
            RiskCategory::Physical,
            RiskCategory::Liability,
            RiskCategory::Operational,
            RiskCategory::People,
            RiskCategory::IndustrySpecific,
        ]
    }

    /// Get the JSON key used in classifier output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Physical => "physical",
            RiskCategory::Liability => "liability",
            RiskCategory::Operational => "operational",
            RiskCategory::People => "people",
            RiskCategory::IndustrySpecific => "industry_specific",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_lookup_is_case_insensitive() {
        assert_eq!(
            ProfileCategory::from_relation("covers"),
            Some(ProfileCategory::Coverages)
        );
        assert_eq!(
            ProfileCategory::from_relation("COVERS"),
            Some(ProfileCategory::Coverages)
        );
        assert_eq!(
            ProfileCategory::from_relation("Covers"),
            Some(ProfileCategory::Coverages)
        );
    }

    #[test]
    fn test_unknown_relation_maps_nowhere() {
        assert_eq!(ProfileCategory::from_relation("FOO"), None);
        assert_eq!(ProfileCategory::from_relation(""), None);
    }

    #[test]
    fn test_full_relation_table() {
        let table = [
            ("COVERS", ProfileCategory::Coverages),
            ("INCLUDES", ProfileCategory::Coverages),
            ("INSURED", ProfileCategory::Coverages),
            ("APPLIES_TO", ProfileCategory::Coverages),
            ("EXCLUDES", ProfileCategory::Exclusions),
            ("EXCLUDED_FROM", ProfileCategory::Exclusions),
            ("LIMIT", ProfileCategory::Limits),
            ("SUM_INSURED", ProfileCategory::Limits),
            ("REQUIRES", ProfileCategory::Conditions),
            ("MUST", ProfileCategory::Conditions),
            ("OBLIGATION", ProfileCategory::Conditions),
            ("DEFINED_AS", ProfileCategory::Definitions),
            ("DEFINED_IN", ProfileCategory::Definitions),
        ];
        for (relation, category) in table {
            assert_eq!(ProfileCategory::from_relation(relation), Some(category));
        }
    }

    #[test]
    fn test_risk_category_keys() {
        assert_eq!(RiskCategory::IndustrySpecific.as_str(), "industry_specific");
        assert_eq!(RiskCategory::all().len(), 5);
    }
}
