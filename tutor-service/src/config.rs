//! Service configuration loaded from environment variables.
//! External interactions: DATABASE_URL, SENTIMENT_API_URL / SENTIMENT_API_KEY,
//! ASSET_DIR, TOPIC_IMAGE_DIR, REFERENCE_IMAGE_DIR, LOG_FILE, plus the LLM
//! variables read by [`llm_client::EnvLlmConfig`].

use anyhow::{Context, Result};
use llm_client::EnvLlmConfig;
use std::env;

/// URL prefix under which the asset directory is served.
pub const ASSET_URL_PREFIX: &str = "/static/generated";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub sentiment_api_url: String,
    pub sentiment_api_key: Option<String>,
    pub sentiment_timeout_secs: u64,
    pub asset_dir: String,
    pub topic_image_dir: String,
    pub reference_image_dir: String,
    pub log_file: Option<String>,
    pub llm: EnvLlmConfig,
}

impl AppConfig {
    /// Loads from environment. SENTIMENT_API_URL and OPENAI_API_KEY are
    /// required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:tutor.db".to_string());
        let sentiment_api_url =
            env::var("SENTIMENT_API_URL").context("SENTIMENT_API_URL not set")?;
        let sentiment_api_key = env::var("SENTIMENT_API_KEY").ok();
        let sentiment_timeout_secs = env::var("SENTIMENT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        let asset_dir = env::var("ASSET_DIR").unwrap_or_else(|_| "static/generated".to_string());
        // Topic images live in the served asset directory unless overridden.
        let topic_image_dir = env::var("TOPIC_IMAGE_DIR").unwrap_or_else(|_| asset_dir.clone());
        let reference_image_dir =
            env::var("REFERENCE_IMAGE_DIR").unwrap_or_else(|_| "reference_images".to_string());
        let log_file = env::var("LOG_FILE").ok();
        let llm = EnvLlmConfig::from_env()?;

        Ok(Self {
            database_url,
            sentiment_api_url,
            sentiment_api_key,
            sentiment_timeout_secs,
            asset_dir,
            topic_image_dir,
            reference_image_dir,
            log_file,
            llm,
        })
    }
}
