//! Persistence seam for the facade: turn recording, context reconstruction,
//! and the chat-history view. Implemented by [`crate::TurnRepository`]; tests
//! substitute mocks to exercise saved/not-saved behavior.

use async_trait::async_trait;
use prompt::ContextPair;

use crate::error::StorageError;
use crate::models::{ChatMessage, ChatRecord, TurnRecord};

#[async_trait]
pub trait TurnStore: Send + Sync {
    /// Inserts one turn record. Records are immutable after insertion.
    async fn insert_turn(&self, turn: &TurnRecord) -> Result<(), StorageError>;

    async fn get_turn(&self, id: &str) -> Result<Option<TurnRecord>, StorageError>;

    /// All turns of a session ordered by turn_index ascending.
    async fn list_turns(&self, session_id: &str) -> Result<Vec<TurnRecord>, StorageError>;

    /// Prior Q/A pairs for prompt context: answered turns only, ordered by
    /// turn_index ascending. Turns that never produced an answer are skipped.
    async fn session_context(&self, session_id: &str) -> Result<Vec<ContextPair>, StorageError>;

    /// Count of answered turns in the session; this is the ordinal assigned
    /// to the next recorded turn. The facade derives the ordinal from the
    /// context it already fetched (equal by construction); this query serves
    /// the history view and callers that need the ordinal without the
    /// context rows.
    async fn answered_turn_count(&self, session_id: &str) -> Result<i64, StorageError>;

    /// Creates a chat plus its first session; returns the chat and session id.
    async fn create_chat(&self) -> Result<(ChatRecord, String), StorageError>;

    /// Bumps the chat's last_active timestamp.
    async fn touch_chat(&self, chat_id: &str) -> Result<(), StorageError>;

    async fn rename_chat(&self, chat_id: &str, title: &str) -> Result<ChatRecord, StorageError>;

    /// Deletes a chat together with its sessions and their turns.
    async fn delete_chat(&self, chat_id: &str) -> Result<(), StorageError>;

    /// All chats, most recently active first.
    async fn list_chats(&self) -> Result<Vec<ChatRecord>, StorageError>;

    /// User/assistant message projection of all turns under the chat's
    /// sessions, oldest first.
    async fn chat_messages(&self, chat_id: &str) -> Result<Vec<ChatMessage>, StorageError>;
}
