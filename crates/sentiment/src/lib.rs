//! # Sentiment classification
//!
//! The [`SentimentModel`] trait is the seam to an external binary/ternary
//! text-classification service; [`SentimentClassifier`] is the rule layer on
//! top of it: confidence-tiered scores plus the completion-keyword override.
//!
//! Model failure is fatal to the call. A silently wrong sentiment would
//! corrupt prompt adaptation downstream, so no fallback label is fabricated.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use tutor_core::{Sentiment, SentimentLabel, TutorError};

mod http_model;

pub use http_model::HttpSentimentModel;

/// Raw output of the external classification service.
#[derive(Debug, Clone)]
pub struct ClassifierOutput {
    /// "positive" / "negative" (case-insensitive); anything else maps to neutral.
    pub category: String,
    /// Confidence in [0, 1].
    pub confidence: f64,
}

/// External text-classification seam.
#[async_trait]
pub trait SentimentModel: Send + Sync {
    async fn classify(&self, text: &str) -> Result<ClassifierOutput>;
}

/// Phrases that signal neutral closure rather than emotional positivity.
const COMPLETION_KEYWORDS: [&str; 5] =
    ["completed", "finished", "done", "understood", "accomplished"];

/// Rule layer mapping raw model output to a (label, tiered score) pair.
pub struct SentimentClassifier {
    model: Arc<dyn SentimentModel>,
}

impl SentimentClassifier {
    pub fn new(model: Arc<dyn SentimentModel>) -> Self {
        Self { model }
    }

    /// Classifies non-empty text. Callers reject empty input before this runs.
    ///
    /// Override: completion keyword present AND raw category positive AND
    /// confidence < 0.8 forces (Neutral, 0). A learner declaring task
    /// completion at weak confidence signals closure, not enthusiasm.
    pub async fn classify(&self, text: &str) -> tutor_core::Result<Sentiment> {
        let raw = self
            .model
            .classify(text)
            .await
            .map_err(|e| TutorError::Classification(e.to_string()))?;

        let category = raw.category.to_lowercase();
        let confidence = raw.confidence;
        debug!(category = %category, confidence, "raw classifier output");

        let lowered = text.to_lowercase();
        if category == "positive"
            && confidence < 0.8
            && COMPLETION_KEYWORDS.iter().any(|k| lowered.contains(k))
        {
            return Ok(Sentiment::neutral());
        }

        let sentiment = match category.as_str() {
            "positive" => Sentiment {
                label: SentimentLabel::Positive,
                score: tier(confidence),
            },
            "negative" => Sentiment {
                label: SentimentLabel::Negative,
                score: -tier(confidence),
            },
            _ => Sentiment::neutral(),
        };
        Ok(sentiment)
    }
}

/// Confidence tiers: > 0.8 -> 2, > 0.6 -> 1, else 0.5.
fn tier(confidence: f64) -> f64 {
    if confidence > 0.8 {
        2.0
    } else if confidence > 0.6 {
        1.0
    } else {
        0.5
    }
}
