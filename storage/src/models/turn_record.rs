//! Turn record model for persistence.
//!
//! Maps to the `turns` table and is used by TurnRepository. One record per
//! learner submission; immutable after insertion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TurnRecord {
    pub id: String,
    /// None for standalone turns recorded outside any session.
    pub session_id: Option<String>,
    /// Position within the session; equals the count of prior answered turns.
    pub turn_index: i64,
    pub query_text: String,
    /// "text", "voice", or "document".
    pub modality: String,
    /// Present only for voice turns.
    pub transcript: Option<String>,
    /// "POSITIVE", "NEUTRAL", or "NEGATIVE".
    pub sentiment_label: String,
    /// Tiered score in {-2, -1, -0.5, 0, 0.5, 1, 2}.
    pub sentiment_score: f64,
    pub simplified_answer: Option<String>,
    pub detailed_answer: Option<String>,
    pub language: String,
    /// Persisted illustration projection; the inline SVG payload is not stored.
    pub illustration_url: Option<String>,
    pub illustration_kind: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TurnRecord {
    /// Creates a new record with a generated UUID and current timestamp.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        session_id: Option<String>,
        turn_index: i64,
        query_text: String,
        modality: String,
        transcript: Option<String>,
        sentiment_label: String,
        sentiment_score: f64,
        simplified_answer: Option<String>,
        detailed_answer: Option<String>,
        language: String,
        illustration_url: Option<String>,
        illustration_kind: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id,
            turn_index,
            query_text,
            modality,
            transcript,
            sentiment_label,
            sentiment_score,
            simplified_answer,
            detailed_answer,
            language,
            illustration_url,
            illustration_kind,
            created_at: Utc::now(),
        }
    }

    /// The answer used for context reconstruction: detailed preferred,
    /// simplified as fallback.
    pub fn answer(&self) -> Option<&str> {
        self.detailed_answer
            .as_deref()
            .or(self.simplified_answer.as_deref())
    }
}
