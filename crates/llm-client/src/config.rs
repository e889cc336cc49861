//! LLM configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Env-driven configuration for the OpenAI-compatible generation endpoint.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Bound on each generation call; a stalled upstream must not hang requests.
    pub timeout_secs: u64,
}

impl EnvLlmConfig {
    /// Loads OPENAI_API_KEY (required), OPENAI_BASE_URL, LLM_MODEL, and
    /// LLM_TIMEOUT_SECS (default 30).
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let timeout_secs = env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);
        Ok(Self {
            api_key,
            base_url,
            model,
            timeout_secs,
        })
    }
}
