//! Core types: sentiment label/score, input modality, and illustration result.

use serde::{Deserialize, Serialize};

/// Three-way emotional state derived from the learner's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Uppercase form used in persisted records ("POSITIVE", "NEUTRAL", "NEGATIVE").
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Negative => "NEGATIVE",
        }
    }

    /// Lowercase form used inside prompts ("the student is feeling positive").
    pub fn as_lowercase(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

/// Classified sentiment: label plus a confidence-tiered signed score.
///
/// The score is not a probability; it is bounded to {-2, -1, -0.5, 0, 0.5, 1, 2}
/// where sign matches the label and magnitude reflects the confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

impl Sentiment {
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
        }
    }
}

/// How the learner's question arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Voice,
    Document,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Text => "text",
            Modality::Voice => "voice",
            Modality::Document => "document",
        }
    }
}

/// Which stage of the illustration pipeline produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IllustrationSource {
    /// Pre-indexed topic-tagged image matched the query.
    TopicLibrary,
    /// Procedurally generated vector diagram.
    GeneratedVector,
    /// Secondary library image copied into the servable asset store.
    ReferenceLibrary,
    /// No stage fired; only a generic explanation is attached.
    None,
}

/// One supporting text snippet attached to an illustration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub text: String,
    pub source_name: String,
    pub page: u32,
}

/// Result of one illustration request.
///
/// `url` is None iff `source` is [`IllustrationSource::None`]; `svg` is Some
/// only for [`IllustrationSource::GeneratedVector`]. Produced fresh per call;
/// the inline SVG payload is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Illustration {
    pub source: IllustrationSource,
    pub url: Option<String>,
    pub svg: Option<String>,
    pub explanations: Vec<Explanation>,
}
