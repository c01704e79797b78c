//! Immutable graph snapshots with disk persistence.
//!
//! A snapshot is built once, optionally written to a single JSON file,
//! and loaded verbatim on subsequent runs. There is no versioning or
//! migration; a format change requires deleting the cache file.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BrollyResult;

use super::KnowledgeGraph;

/// A fully built knowledge graph plus build metadata.
///
/// Snapshots are never mutated after construction. Rebuilds produce a new
/// snapshot and the serving layer republishes the active handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub graph: KnowledgeGraph,
    pub built_at: DateTime<Utc>,
}

impl GraphSnapshot {
    /// Wrap a freshly built graph.
    pub fn new(graph: KnowledgeGraph) -> Self {
        Self {
            graph,
            built_at: Utc::now(),
        }
    }

    /// Write the snapshot to `path` as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> BrollyResult<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a snapshot from `path`.
    pub fn load(path: impl AsRef<Path>) -> BrollyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
