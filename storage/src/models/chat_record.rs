//! Chat record model: the coarse parent entity shown in the history sidebar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatRecord {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Bumped whenever a turn is recorded against one of the chat's sessions.
    pub last_active: DateTime<Utc>,
}

impl ChatRecord {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: "New Chat".to_string(),
            created_at: now,
            last_active: now,
        }
    }
}

impl Default for ChatRecord {
    fn default() -> Self {
        Self::new()
    }
}
