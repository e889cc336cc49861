//! Tests for [`orchestrator::ResponseOrchestrator`] degradation behavior
//! with a scripted mock LlmClient; no real generation service.

use async_trait::async_trait;
use llm_client::LlmClient;
use orchestrator::ResponseOrchestrator;
use prompt::ContextPair;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tutor_core::{SentimentLabel, TutorError};

/// Markers the templates put into each request, used to script the mock.
const DETAILED_MARKER: &str = "step-by-step";
const SIMPLIFIED_MARKER: &str = "no more than four short sentences";
const COMPRESSION_MARKER: &str = "Explain this briefly in 2-3 sentences:";

/// Mock client: per-template failure switches plus a prompt log.
struct ScriptedLlm {
    fail_detailed: bool,
    fail_simplified: bool,
    fail_generic: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    fn new(fail_detailed: bool, fail_simplified: bool, fail_generic: bool) -> Self {
        Self {
            fail_detailed,
            fail_simplified,
            fail_generic,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn generate(&self, request: &str) -> anyhow::Result<String> {
        self.prompts.lock().unwrap().push(request.to_string());
        if let Some(rest) = request.strip_prefix(COMPRESSION_MARKER) {
            return Ok(format!("BRIEF<{}>", rest.trim()));
        }
        if request.contains(DETAILED_MARKER) {
            if self.fail_detailed {
                anyhow::bail!("detailed endpoint down");
            }
            return Ok("DETAILED ANSWER".to_string());
        }
        if request.contains(SIMPLIFIED_MARKER) {
            if self.fail_simplified {
                anyhow::bail!("simplified endpoint down");
            }
            return Ok("SIMPLIFIED ANSWER".to_string());
        }
        if self.fail_generic {
            anyhow::bail!("generic endpoint down");
        }
        Ok("GENERIC ANSWER".to_string())
    }
}

fn orchestrator(llm: Arc<ScriptedLlm>) -> ResponseOrchestrator {
    ResponseOrchestrator::new(llm, Duration::from_secs(5))
}

/// **Test: Happy path returns both specialized tiers.**
#[tokio::test]
async fn test_both_tiers_succeed() {
    let llm = Arc::new(ScriptedLlm::new(false, false, false));
    let response = orchestrator(llm.clone())
        .respond("What is friction?", &[], SentimentLabel::Neutral)
        .await
        .expect("respond");

    assert_eq!(response.detailed, "DETAILED ANSWER");
    assert_eq!(response.simplified.as_deref(), Some("SIMPLIFIED ANSWER"));
    assert!(!response.degraded);
}

/// **Test: Simplified failure degrades to generic + compression.**
///
/// **Setup:** Mock fails the simplified template only.
/// **Action:** `respond`.
/// **Expected:** No error; detailed comes from the generic call and the
/// simplified tier is a compression of that generated text.
#[tokio::test]
async fn test_simplified_failure_degrades() {
    let llm = Arc::new(ScriptedLlm::new(false, true, false));
    let response = orchestrator(llm.clone())
        .respond("What is friction?", &[], SentimentLabel::Neutral)
        .await
        .expect("respond");

    assert!(response.degraded);
    assert_eq!(response.detailed, "GENERIC ANSWER");
    assert_eq!(response.simplified.as_deref(), Some("BRIEF<GENERIC ANSWER>"));
}

/// **Test: Detailed failure takes the same fallback path.**
#[tokio::test]
async fn test_detailed_failure_degrades() {
    let llm = Arc::new(ScriptedLlm::new(true, false, false));
    let response = orchestrator(llm.clone())
        .respond("What is friction?", &[], SentimentLabel::Positive)
        .await
        .expect("respond");

    assert!(response.degraded);
    assert_eq!(response.detailed, "GENERIC ANSWER");
}

/// **Test: Total upstream failure surfaces a Generation error.**
#[tokio::test]
async fn test_total_failure_is_error() {
    let llm = Arc::new(ScriptedLlm::new(true, true, true));
    let result = orchestrator(llm.clone())
        .respond("What is friction?", &[], SentimentLabel::Neutral)
        .await;

    assert!(matches!(result, Err(TutorError::Generation(_))));
}

/// **Test: Prompt embeds sentiment and ordered session context.**
///
/// **Setup:** Two prior context pairs, negative label.
/// **Action:** `respond`, then inspect the logged prompts.
/// **Expected:** Every request names the sentiment and carries the
/// `Q:/A:` blocks in order, ending with the new question.
#[tokio::test]
async fn test_prompt_carries_sentiment_and_context() {
    let llm = Arc::new(ScriptedLlm::new(false, false, false));
    let context = vec![ContextPair::new("Q1", "A1"), ContextPair::new("Q2", "A2")];
    orchestrator(llm.clone())
        .respond("What next?", &context, SentimentLabel::Negative)
        .await
        .expect("respond");

    let prompts = llm.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 2);
    for request in prompts.iter() {
        assert!(request.contains("The student is feeling negative."));
        assert!(request.contains("Q: Q1\nA: A1\nQ: Q2\nA: A2"));
        assert!(request.contains("Q: What next?"));
    }
}
