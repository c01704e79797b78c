//! Per-policy profile types.

use serde::{Deserialize, Serialize};

use super::category::ProfileCategory;

/// One structured fact row in a policy profile.
///
/// The relation is stored uppercased, as it was matched against the
/// category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRecord {
    pub head: String,
    pub relation: String,
    pub tail: String,
}

impl FactRecord {
    /// Create a new fact record.
    pub fn new(
        head: impl Into<String>,
        relation: impl Into<String>,
        tail: impl Into<String>,
    ) -> Self {
        Self {
            head: head.into(),
            relation: relation.into(),
            tail: tail.into(),
        }
    }
}

/// Per-policy projection of the knowledge graph into the five fixed
/// categories. A present-but-empty profile means the policy contributed
/// edges but none of its relations mapped to a category; that is distinct
/// from the policy being absent from the graph entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyProfile {
    #[serde(rename = "Coverages")]
    pub coverages: Vec<FactRecord>,
    #[serde(rename = "Exclusions")]
    pub exclusions: Vec<FactRecord>,
    #[serde(rename = "Limits")]
    pub limits: Vec<FactRecord>,
    #[serde(rename = "Conditions")]
    pub conditions: Vec<FactRecord>,
    #[serde(rename = "Definitions")]
    pub definitions: Vec<FactRecord>,
}

impl PolicyProfile {
    /// Append a record to the given category's list.
    pub fn push(&mut self, category: ProfileCategory, record: FactRecord) {
        self.rows_mut(category).push(record);
    }

    /// Records in the given category.
    pub fn rows(&self, category: ProfileCategory) -> &[FactRecord] {
        match category {
            ProfileCategory::Coverages => &self.coverages,
            ProfileCategory::Exclusions => &self.exclusions,
            ProfileCategory::Limits => &self.limits,
            ProfileCategory::Conditions => &self.conditions,
            ProfileCategory::Definitions => &self.definitions,
        }
    }

    fn rows_mut(&mut self, category: ProfileCategory) -> &mut Vec<FactRecord> {
        match category {
            ProfileCategory::Coverages => &mut self.coverages,
            ProfileCategory::Exclusions => &mut self.exclusions,
            ProfileCategory::Limits => &mut self.limits,
            ProfileCategory::Conditions => &mut self.conditions,
            ProfileCategory::Definitions => &mut self.definitions,
        }
    }

    /// Whether every category list is empty.
    pub fn is_empty(&self) -> bool {
        ProfileCategory::all()
            .iter()
            .all(|c| self.rows(*c).is_empty())
    }

    /// Total record count across categories.
    pub fn len(&self) -> usize {
        ProfileCategory::all().iter().map(|c| self.rows(*c).len()).sum()
    }
}
