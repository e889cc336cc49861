//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI-compatible implementation.
//! Transport-agnostic; the orchestrator talks only to this seam.
//!
//! The trait is prompt-in/text-out on purpose: all message shaping happens in
//! the `prompt` crate, so alternative backends only need one method.

use anyhow::Result;
use async_trait::async_trait;

mod config;
mod openai_llm;

pub use config::EnvLlmConfig;
pub use openai_llm::OpenAiLlmClient;

/// Text-generation seam: one prompt in, the full reply text out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token_short_is_fully_hidden() {
        assert_eq!(mask_token("short"), "***");
        assert_eq!(mask_token("elevenchars"), "***");
    }

    #[test]
    fn test_mask_token_keeps_head_and_tail() {
        assert_eq!(mask_token("sk-abcd1234efgh5678"), "sk-abcd***5678");
    }
}
