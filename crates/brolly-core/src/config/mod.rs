//! Configuration system for brolly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::traits::LlmConfig;

/// LLM provider type. Selected once at process start; core logic never
/// branches on which backend is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Hosted chat-completions API via OpenRouter.
    #[default]
    OpenRouter,
    /// Local model served by Ollama.
    Ollama,
}

/// Provider configuration with type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmProviderConfig {
    /// Provider type.
    pub provider: LlmProvider,
    /// Provider-specific configuration.
    #[serde(flatten)]
    pub config: LlmConfig,
}

impl Default for LlmProviderConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::OpenRouter,
            config: LlmConfig::default(),
        }
    }
}

/// Main engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// LLM configuration.
    pub llm: LlmProviderConfig,
    /// Directory of source policy documents.
    pub documents_dir: PathBuf,
    /// Directory for the cached graph snapshot and debug artifacts.
    pub data_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let brolly_dir = dirs::home_dir()
            .map(|h| h.join(".brolly"))
            .unwrap_or_else(|| PathBuf::from(".brolly"));

        Self {
            llm: LlmProviderConfig::default(),
            documents_dir: PathBuf::from("./pdfs"),
            data_dir: brolly_dir,
        }
    }
}

impl EngineConfig {
    /// Path of the cached graph snapshot.
    pub fn graph_path(&self) -> PathBuf {
        self.data_dir.join("graph.json")
    }

    /// Path of the raw triplet map debug artifact.
    pub fn triplets_path(&self) -> PathBuf {
        self.data_dir.join("triplets.json")
    }

    /// Load configuration from a file (TOML or JSON).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::error::BrollyResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| crate::error::BrollyError::Configuration(e.to_string())),
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| crate::error::BrollyError::Configuration(e.to_string())),
            _ => Err(crate::error::BrollyError::Configuration(
                "Unsupported config file format. Use .toml or .json".to_string(),
            )),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(provider) = std::env::var("BROLLY_LLM_PROVIDER") {
            match provider.to_lowercase().as_str() {
                "ollama" | "local" => config.llm.provider = LlmProvider::Ollama,
                _ => config.llm.provider = LlmProvider::OpenRouter,
            }
        }
        if let Ok(model) = std::env::var("BROLLY_LLM_MODEL") {
            config.llm.config.model = model;
        }
        if let Ok(api_key) = std::env::var("OPENROUTER_API_KEY") {
            config.llm.config.api_key = Some(api_key);
        }
        if let Ok(dir) = std::env::var("BROLLY_DOCUMENTS_DIR") {
            config.documents_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("BROLLY_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config
    }
}
