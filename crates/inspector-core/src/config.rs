use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{InspectorError, Result};

pub const ENV_API_BASE: &str = "INSPECTOR_API_BASE";
pub const ENV_BIND: &str = "INSPECTOR_BIND";
pub const ENV_DB_PATH: &str = "INSPECTOR_DB_PATH";
pub const ENV_OLLAMA_HOST: &str = "OLLAMA_HOST";
pub const ENV_OLLAMA_TIMEOUT: &str = "OLLAMA_TIMEOUT_SECS";
pub const ENV_SIMILARITY: &str = "INSPECTOR_SIMILARITY";
pub const ENV_EMBED_MODEL: &str = "INSPECTOR_EMBED_MODEL";

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectorConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub similarity: SimilarityConfig,
}

impl InspectorConfig {
    /// Defaults overridden by process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base) = get(ENV_API_BASE) {
            config.api.base_url = base;
        }
        if let Some(bind) = get(ENV_BIND) {
            config.server.bind = bind;
        }
        if let Some(path) = get(ENV_DB_PATH) {
            config.server.database_path = PathBuf::from(path);
        }
        if let Some(host) = get(ENV_OLLAMA_HOST) {
            config.ollama.host = host;
        }
        if let Some(secs) = get(ENV_OLLAMA_TIMEOUT) {
            config.ollama.timeout_secs = secs.trim().parse().map_err(|_| {
                InspectorError::Config(format!("{} must be a number of seconds, got {:?}", ENV_OLLAMA_TIMEOUT, secs))
            })?;
        }
        if let Some(method) = get(ENV_SIMILARITY) {
            config.similarity.method = method.parse()?;
        }
        if let Some(model) = get(ENV_EMBED_MODEL) {
            config.similarity.embedding_model = model;
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the comparison service, without the `/api` path
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
    pub database_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
            database_path: default_db_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub host: String,
    pub timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:11434".to_string(),
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMethod {
    /// Word-level diff ratio of the two outputs
    #[default]
    Lexical,
    /// Cosine similarity of embedding vectors
    Embedding,
}

impl SimilarityMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMethod::Lexical => "lexical",
            SimilarityMethod::Embedding => "embedding",
        }
    }
}

impl FromStr for SimilarityMethod {
    type Err = InspectorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lexical" => Ok(SimilarityMethod::Lexical),
            "embedding" => Ok(SimilarityMethod::Embedding),
            other => Err(InspectorError::Config(format!(
                "Unknown similarity method {:?} (expected lexical or embedding)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityConfig {
    pub method: SimilarityMethod,
    pub embedding_model: String,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            method: SimilarityMethod::default(),
            embedding_model: "nomic-embed-text".to_string(),
        }
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("model-inspector")
        .join("comparisons.db")
}
