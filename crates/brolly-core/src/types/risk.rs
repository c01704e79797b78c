//! Risk classification types.

use serde::{Deserialize, Serialize};

use super::category::RiskCategory;

/// Detected business risks, bucketed into the five fixed categories.
///
/// This is exactly the JSON shape the classification prompt requests.
/// Every field defaults to an empty list so a partial LLM response still
/// deserializes to the full structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskBreakdown {
    pub physical: Vec<String>,
    pub liability: Vec<String>,
    pub operational: Vec<String>,
    pub people: Vec<String>,
    pub industry_specific: Vec<String>,
}

impl RiskBreakdown {
    /// Phrases in the given category.
    pub fn phrases(&self, category: RiskCategory) -> &[String] {
        match category {
            RiskCategory::Physical => &self.physical,
            RiskCategory::Liability => &self.liability,
            RiskCategory::Operational => &self.operational,
            RiskCategory::People => &self.people,
            RiskCategory::IndustrySpecific => &self.industry_specific,
        }
    }

    /// Iterate every phrase across every category.
    pub fn iter_phrases(&self) -> impl Iterator<Item = &str> {
        RiskCategory::all()
            .iter()
            .flat_map(|c| self.phrases(*c).iter().map(String::as_str))
    }

    /// Whether no risks were detected in any category.
    pub fn is_empty(&self) -> bool {
        RiskCategory::all().iter().all(|c| self.phrases(*c).is_empty())
    }
}

/// Full risk analysis result: detected risks plus the coverage codes the
/// rule pass derived from them. Both lists are deduplicated and sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub risks: RiskBreakdown,
    pub mandatory: Vec<String>,
    pub optional: Vec<String>,
}

/// Structured business information, as submitted by intake forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessProfile {
    pub business_name: String,
    pub industry: String,
    pub employees: String,
    pub revenue: String,
    pub assets: String,
    pub description: String,
}

/// Risk analysis of a structured business profile, with the flattened
/// text the classifier actually saw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRiskAnalysis {
    pub input_summary: String,
    pub risks: RiskBreakdown,
    pub mandatory_coverages: Vec<String>,
    pub optional_coverages: Vec<String>,
}
