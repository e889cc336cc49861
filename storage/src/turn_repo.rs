//! Turn repository: persistence and queries for turns, sessions, and chats.
//!
//! Uses SqlitePoolManager and the models (TurnRecord, ChatRecord,
//! ChatMessage). External: SQLite via sqlx; callers go through the
//! [`TurnStore`] trait.

use async_trait::async_trait;
use chrono::Utc;
use prompt::ContextPair;
use tracing::info;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{ChatMessage, ChatRecord, TurnRecord};
use crate::sqlite_pool::SqlitePoolManager;
use crate::store::TurnStore;

#[derive(Clone)]
pub struct TurnRepository {
    pool_manager: SqlitePoolManager,
}

impl TurnRepository {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating database tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS chats (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                created_at TEXT NOT NULL,
                last_active TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sessions (
                id TEXT PRIMARY KEY,
                chat_id TEXT NOT NULL,
                started_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS turns (
                id TEXT PRIMARY KEY,
                session_id TEXT,
                turn_index INTEGER NOT NULL,
                query_text TEXT NOT NULL,
                modality TEXT NOT NULL,
                transcript TEXT,
                sentiment_label TEXT NOT NULL,
                sentiment_score REAL NOT NULL,
                simplified_answer TEXT,
                detailed_answer TEXT,
                language TEXT NOT NULL,
                illustration_url TEXT,
                illustration_kind TEXT,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        for statement in [
            "CREATE INDEX IF NOT EXISTS idx_turns_session_id ON turns(session_id)",
            "CREATE INDEX IF NOT EXISTS idx_turns_turn_index ON turns(turn_index)",
            "CREATE INDEX IF NOT EXISTS idx_sessions_chat_id ON sessions(chat_id)",
            "CREATE INDEX IF NOT EXISTS idx_chats_last_active ON chats(last_active)",
        ] {
            sqlx::query(statement).execute(pool).await?;
        }

        info!("Database tables created successfully");
        Ok(())
    }
}

#[async_trait]
impl TurnStore for TurnRepository {
    async fn insert_turn(&self, turn: &TurnRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO turns (
                id, session_id, turn_index, query_text, modality, transcript,
                sentiment_label, sentiment_score, simplified_answer, detailed_answer,
                language, illustration_url, illustration_kind, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&turn.id)
        .bind(&turn.session_id)
        .bind(turn.turn_index)
        .bind(&turn.query_text)
        .bind(&turn.modality)
        .bind(&turn.transcript)
        .bind(&turn.sentiment_label)
        .bind(turn.sentiment_score)
        .bind(&turn.simplified_answer)
        .bind(&turn.detailed_answer)
        .bind(&turn.language)
        .bind(&turn.illustration_url)
        .bind(&turn.illustration_kind)
        .bind(turn.created_at)
        .execute(pool)
        .await?;

        info!(
            "Saved turn: id={}, session={:?}, index={}",
            turn.id, turn.session_id, turn.turn_index
        );
        Ok(())
    }

    async fn get_turn(&self, id: &str) -> Result<Option<TurnRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let turn = sqlx::query_as::<_, TurnRecord>("SELECT * FROM turns WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(turn)
    }

    async fn list_turns(&self, session_id: &str) -> Result<Vec<TurnRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let turns = sqlx::query_as::<_, TurnRecord>(
            "SELECT * FROM turns WHERE session_id = ? ORDER BY turn_index ASC",
        )
        .bind(session_id)
        .fetch_all(pool)
        .await?;

        info!("Retrieved {} turns for session {}", turns.len(), session_id);
        Ok(turns)
    }

    async fn session_context(&self, session_id: &str) -> Result<Vec<ContextPair>, StorageError> {
        let pool = self.pool_manager.pool();

        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT query_text, COALESCE(detailed_answer, simplified_answer) AS answer
            FROM turns
            WHERE session_id = ?
              AND COALESCE(detailed_answer, simplified_answer) IS NOT NULL
            ORDER BY turn_index ASC
            "#,
        )
        .bind(session_id)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(query, answer)| ContextPair::new(query, answer))
            .collect())
    }

    async fn answered_turn_count(&self, session_id: &str) -> Result<i64, StorageError> {
        let pool = self.pool_manager.pool();

        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM turns
            WHERE session_id = ?
              AND COALESCE(detailed_answer, simplified_answer) IS NOT NULL
            "#,
        )
        .bind(session_id)
        .fetch_one(pool)
        .await?;

        Ok(count.0)
    }

    async fn create_chat(&self) -> Result<(ChatRecord, String), StorageError> {
        let pool = self.pool_manager.pool();
        let chat = ChatRecord::new();

        sqlx::query("INSERT INTO chats (id, title, created_at, last_active) VALUES (?, ?, ?, ?)")
            .bind(&chat.id)
            .bind(&chat.title)
            .bind(chat.created_at)
            .bind(chat.last_active)
            .execute(pool)
            .await?;

        let session_id = Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO sessions (id, chat_id, started_at) VALUES (?, ?, ?)")
            .bind(&session_id)
            .bind(&chat.id)
            .bind(Utc::now())
            .execute(pool)
            .await?;

        info!("Created chat {} with session {}", chat.id, session_id);
        Ok((chat, session_id))
    }

    async fn touch_chat(&self, chat_id: &str) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query("UPDATE chats SET last_active = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(chat_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    async fn rename_chat(&self, chat_id: &str, title: &str) -> Result<ChatRecord, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("UPDATE chats SET title = ?, last_active = ? WHERE id = ?")
            .bind(title)
            .bind(Utc::now())
            .bind(chat_id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("chat {}", chat_id)));
        }

        let chat = sqlx::query_as::<_, ChatRecord>("SELECT * FROM chats WHERE id = ?")
            .bind(chat_id)
            .fetch_one(pool)
            .await?;

        Ok(chat)
    }

    async fn delete_chat(&self, chat_id: &str) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        // Turns first, then sessions, then the chat itself.
        sqlx::query(
            "DELETE FROM turns WHERE session_id IN (SELECT id FROM sessions WHERE chat_id = ?)",
        )
        .bind(chat_id)
        .execute(pool)
        .await?;

        sqlx::query("DELETE FROM sessions WHERE chat_id = ?")
            .bind(chat_id)
            .execute(pool)
            .await?;

        let result = sqlx::query("DELETE FROM chats WHERE id = ?")
            .bind(chat_id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("chat {}", chat_id)));
        }

        info!("Deleted chat {} with its sessions and turns", chat_id);
        Ok(())
    }

    async fn list_chats(&self) -> Result<Vec<ChatRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let chats =
            sqlx::query_as::<_, ChatRecord>("SELECT * FROM chats ORDER BY last_active DESC")
                .fetch_all(pool)
                .await?;

        Ok(chats)
    }

    async fn chat_messages(&self, chat_id: &str) -> Result<Vec<ChatMessage>, StorageError> {
        let pool = self.pool_manager.pool();

        let turns = sqlx::query_as::<_, TurnRecord>(
            r#"
            SELECT t.* FROM turns t
            JOIN sessions s ON t.session_id = s.id
            WHERE s.chat_id = ?
            ORDER BY t.created_at ASC
            "#,
        )
        .bind(chat_id)
        .fetch_all(pool)
        .await?;

        let mut messages = Vec::new();
        for turn in &turns {
            messages.push(ChatMessage {
                id: format!("user_{}", turn.id),
                kind: "user".to_string(),
                content: turn.query_text.clone(),
                created_at: turn.created_at,
                turn_id: turn.id.clone(),
                simplified_answer: None,
                detailed_answer: None,
            });

            // Assistant entry only when the turn produced an answer.
            if let Some(answer) = turn.answer() {
                messages.push(ChatMessage {
                    id: format!("assistant_{}", turn.id),
                    kind: "assistant".to_string(),
                    content: answer.to_string(),
                    created_at: turn.created_at,
                    turn_id: turn.id.clone(),
                    simplified_answer: turn.simplified_answer.clone(),
                    detailed_answer: turn.detailed_answer.clone(),
                });
            }
        }

        info!(
            "Projected {} messages for chat {} from {} turns",
            messages.len(),
            chat_id,
            turns.len()
        );
        Ok(messages)
    }
}
