//! Configuration for the query service
//!
//! All values come from the environment. Clients are constructed lazily: a
//! missing variable is logged at startup and surfaces as a per-request
//! configuration error only when the affected backend is actually called, so
//! partial misconfiguration never prevents the process from serving the
//! corpora that are configured.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Search index configuration
    pub search: SearchConfig,
    /// Chat-completion configuration
    pub llm: LlmConfig,
    /// Prompt template configuration
    pub prompts: PromptConfig,
}

impl Settings {
    /// Load settings from the environment
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env_var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: env_var("PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                enable_cors: true,
            },
            search: SearchConfig {
                endpoint: env_var("SEARCH_ENDPOINT"),
                api_key: env_var("SEARCH_API_KEY"),
                api_version: env_var("SEARCH_API_VERSION")
                    .unwrap_or_else(|| "2023-11-01".to_string()),
                index_memos: env_var("SEARCH_INDEX_MEMOS"),
                index_statutes: env_var("SEARCH_INDEX_CH32"),
                timeout_secs: 30,
            },
            llm: LlmConfig {
                endpoint: env_var("LLM_ENDPOINT"),
                api_key: env_var("LLM_API_KEY"),
                api_version: env_var("LLM_API_VERSION"),
                deployment: env_var("LLM_DEPLOYMENT"),
                temperature: 0.3,
                timeout_secs: 60,
            },
            prompts: PromptConfig {
                dir: env_var("PROMPT_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("prompts")),
            },
        }
    }

    /// Log missing required values at startup
    ///
    /// Presence-only validation: the service still starts, and requests that
    /// need an unset backend fail with a clear configuration error.
    pub fn validate(&self) {
        let required: [(&str, bool); 7] = [
            ("SEARCH_ENDPOINT", self.search.endpoint.is_some()),
            ("SEARCH_API_KEY", self.search.api_key.is_some()),
            ("SEARCH_INDEX_MEMOS", self.search.index_memos.is_some()),
            ("LLM_ENDPOINT", self.llm.endpoint.is_some()),
            ("LLM_API_KEY", self.llm.api_key.is_some()),
            ("LLM_API_VERSION", self.llm.api_version.is_some()),
            ("LLM_DEPLOYMENT", self.llm.deployment.is_some()),
        ];

        for (name, present) in required {
            if !present {
                tracing::warn!(
                    "{} is not set; requests that need it will fail with a configuration error",
                    name
                );
            }
        }
    }
}

/// Read a non-empty environment variable
fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}

/// Managed search index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search service endpoint URL
    pub endpoint: Option<String>,
    /// Search API key
    pub api_key: Option<String>,
    /// Search API version
    pub api_version: String,
    /// Index identifier for the memos corpus
    pub index_memos: Option<String>,
    /// Index identifier for the statutes corpus
    pub index_statutes: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            api_version: "2023-11-01".to_string(),
            index_memos: None,
            index_statutes: None,
            timeout_secs: 30,
        }
    }
}

/// Chat-completion backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// LLM endpoint URL
    pub endpoint: Option<String>,
    /// LLM API key
    pub api_key: Option<String>,
    /// LLM API version
    pub api_version: Option<String>,
    /// Deployment/model identifier
    pub deployment: Option<String>,
    /// Sampling temperature; low for factual, deterministic output
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            api_version: None,
            deployment: None,
            temperature: 0.3,
            timeout_secs: 60,
        }
    }
}

/// Prompt template storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Directory holding one flat template file per corpus
    pub dir: PathBuf,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("prompts"),
        }
    }
}
