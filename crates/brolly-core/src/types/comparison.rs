//! Coverage comparison result.

use serde::{Deserialize, Serialize};

/// Partition of a risk profile's requirements by presence in a policy's
/// covered-items set.
///
/// `available` is the sorted list of everything the policy covers;
/// the four partitions preserve the (already sorted) order of the risk
/// profile's `mandatory` and `optional` lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageComparison {
    pub available: Vec<String>,
    pub mandatory_covered: Vec<String>,
    pub mandatory_missing: Vec<String>,
    pub optional_covered: Vec<String>,
    pub optional_missing: Vec<String>,
}

impl CoverageComparison {
    /// Whether every mandatory requirement is covered.
    pub fn fully_covered(&self) -> bool {
        self.mandatory_missing.is_empty()
    }
}
