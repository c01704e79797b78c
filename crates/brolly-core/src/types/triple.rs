//! Extracted fact triples.

use serde::{Deserialize, Serialize};

/// A `(head, relation, tail)` fact extracted from document text.
///
/// The relation is kept as the raw string the extractor produced. The
/// prompted vocabulary is COVERS, EXCLUDES, LIMIT, CONDITION, DEFINITION,
/// but the LLM is not guaranteed to stay inside it; relations outside the
/// category table simply never reach any policy profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    pub head: String,
    pub relation: String,
    pub tail: String,
}

impl Triple {
    /// Create a new triple.
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
