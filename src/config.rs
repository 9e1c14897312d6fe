//! Environment configuration for the responder service

use crate::llm::Sampling;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("Failed to read system prompt from {path}: {source}")]
    SystemPrompt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub system_prompt_path: Option<PathBuf>,
    pub sampling: Sampling,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            api_key: get("GROQ_API_KEY"),
            model: get("ASSISTANT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("ASSISTANT_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            system_prompt_path: get("ASSISTANT_SYSTEM_PROMPT_PATH").map(PathBuf::from),
            sampling: Sampling::default(),
        })
    }

    /// Resolve the configured system prompt
    pub fn system_prompt(&self) -> Result<String, ConfigError> {
        let path = self.system_prompt_path.as_deref();
        crate::system_prompt::load_system_prompt(path).map_err(|source| ConfigError::SystemPrompt {
            path: path.map(PathBuf::from).unwrap_or_default(),
            source,
        })
    }
}
