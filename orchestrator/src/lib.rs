//! # Response orchestrator
//!
//! Requests a detailed and a simplified answer for a query, adapting the
//! prompt to the learner's sentiment and prior session context.
//!
//! Degradation policy: the two specialized calls run concurrently; if either
//! fails, one generic generation produces the detailed tier and a 2-3
//! sentence compression of it produces the simplified tier. Only when the
//! fallback pair also fails does the orchestrator surface an error — there is
//! no third-tier synthetic answer.

use llm_client::LlmClient;
use prompt::ContextPair;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tutor_core::{SentimentLabel, TutorError};

/// Both answer tiers. `degraded` is true when the tiers were derived from the
/// single generic fallback call rather than the specialized pair.
#[derive(Debug, Clone)]
pub struct TwoTierResponse {
    pub simplified: Option<String>,
    pub detailed: String,
    pub degraded: bool,
}

/// Orchestrates two-tier generation over the [`LlmClient`] seam.
pub struct ResponseOrchestrator {
    llm: Arc<dyn LlmClient>,
    /// Bound on each individual generation call.
    timeout: Duration,
}

impl ResponseOrchestrator {
    pub fn new(llm: Arc<dyn LlmClient>, timeout: Duration) -> Self {
        Self { llm, timeout }
    }

    /// Produces both tiers for the query. Empty context is valid (first turn).
    pub async fn respond(
        &self,
        query: &str,
        context: &[ContextPair],
        label: SentimentLabel,
    ) -> tutor_core::Result<TwoTierResponse> {
        let context_str = prompt::format_session_context(context);
        let base = prompt::tutor_prompt(query, &context_str, label.as_lowercase());

        // The two specialized calls have no ordering dependency.
        let detailed_prompt = prompt::detailed_request(&base);
        let simplified_prompt = prompt::simplified_request(&base);
        let (detailed, simplified) = tokio::join!(
            self.timed_generate(&detailed_prompt),
            self.timed_generate(&simplified_prompt),
        );

        match (detailed, simplified) {
            (Ok(detailed), Ok(simplified)) => {
                info!(context_turns = context.len(), "two-tier generation succeeded");
                Ok(TwoTierResponse {
                    simplified: Some(simplified),
                    detailed,
                    degraded: false,
                })
            }
            (detailed, simplified) => {
                if let Err(ref e) = detailed {
                    warn!(error = %e, "detailed generation failed");
                }
                if let Err(ref e) = simplified {
                    warn!(error = %e, "simplified generation failed");
                }
                self.degraded_respond(&base).await
            }
        }
    }

    /// Fallback: one generic call for the detailed tier, then a brief
    /// compression of that text for the simplified tier.
    async fn degraded_respond(&self, base: &str) -> tutor_core::Result<TwoTierResponse> {
        let detailed = self
            .timed_generate(base)
            .await
            .map_err(|e| TutorError::Generation(e.to_string()))?;
        let simplified = self
            .timed_generate(&prompt::compression_request(&detailed))
            .await
            .map_err(|e| TutorError::Generation(e.to_string()))?;
        info!("degraded generation succeeded");
        Ok(TwoTierResponse {
            simplified: Some(simplified),
            detailed,
            degraded: true,
        })
    }

    async fn timed_generate(&self, request: &str) -> anyhow::Result<String> {
        match tokio::time::timeout(self.timeout, self.llm.generate(request)).await {
            Ok(result) => result,
            Err(_) => anyhow::bail!("generation timed out after {:?}", self.timeout),
        }
    }
}
