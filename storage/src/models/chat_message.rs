//! Chat-history message projection: one turn becomes a user message and, when
//! an answer exists, an assistant message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    /// "user" or "assistant".
    pub kind: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub turn_id: String,
    /// Answer tiers, carried only on assistant messages.
    pub simplified_answer: Option<String>,
    pub detailed_answer: Option<String>,
}
