//! # tutor-service
//!
//! Facade over the tutoring pipeline: classify the learner's sentiment,
//! generate two-tier answers adapted to it, attach a topic illustration, and
//! record the turn.
//!
//! Failure policy per dependency:
//! - classification failure is fatal to the request (no fabricated label)
//! - generation failure degrades inside the orchestrator; only total failure
//!   surfaces here
//! - illustration never fails (worst case source kind `none`)
//! - persistence failure is reported via `saved: false`, never as an error

use illustrator::TopicIllustrator;
use orchestrator::ResponseOrchestrator;
use sentiment::SentimentClassifier;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage::{ChatMessage, ChatRecord, TurnRecord, TurnStore};
use tracing::{info, warn};
use tutor_core::{Illustration, IllustrationSource, Modality, Sentiment, TutorError};
use uuid::Uuid;

mod assembly;
mod config;

pub use assembly::build_service;
pub use config::{AppConfig, ASSET_URL_PREFIX};

/// One learner submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub query_text: String,
    pub modality: Modality,
    /// Owning session; absent for standalone turns.
    pub session_id: Option<String>,
    /// Parent chat to touch on successful persistence.
    pub chat_id: Option<String>,
    /// Voice transcript; persisted only for voice turns.
    pub transcript: Option<String>,
    pub language: Option<String>,
}

impl SubmitRequest {
    /// Plain text submission with no session context.
    pub fn text(query_text: impl Into<String>) -> Self {
        Self {
            query_text: query_text.into(),
            modality: Modality::Text,
            session_id: None,
            chat_id: None,
            transcript: None,
            language: None,
        }
    }
}

/// The structured result of one turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub turn_id: String,
    pub session_id: Option<String>,
    pub turn_index: i64,
    pub sentiment: Sentiment,
    pub simplified_answer: Option<String>,
    pub detailed_answer: String,
    /// True when the answers came from the orchestrator's fallback path.
    pub degraded: bool,
    pub illustration: Illustration,
    /// False when the turn could not be durably recorded; the computed
    /// results above are still valid.
    pub saved: bool,
}

/// The tutoring pipeline facade. Constructed once at startup; all components
/// hold only read-only reference data, so the service is shareable across
/// concurrent requests.
pub struct TutorService {
    classifier: SentimentClassifier,
    orchestrator: ResponseOrchestrator,
    illustrator: TopicIllustrator,
    store: Arc<dyn TurnStore>,
}

impl TutorService {
    pub fn new(
        classifier: SentimentClassifier,
        orchestrator: ResponseOrchestrator,
        illustrator: TopicIllustrator,
        store: Arc<dyn TurnStore>,
    ) -> Self {
        Self {
            classifier,
            orchestrator,
            illustrator,
            store,
        }
    }

    /// Runs the full pipeline for one submission.
    pub async fn submit_turn(&self, request: SubmitRequest) -> tutor_core::Result<TurnOutcome> {
        let query = request.query_text.trim();
        if query.is_empty() {
            return Err(TutorError::EmptyQuery);
        }

        let sentiment = self.classifier.classify(query).await?;

        // Context failure degrades to an empty context; the request proceeds.
        let context = match request.session_id.as_deref() {
            Some(session_id) => match self.store.session_context(session_id).await {
                Ok(context) => context,
                Err(e) => {
                    warn!(error = %e, session_id, "context fetch failed; using empty context");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let response = self
            .orchestrator
            .respond(query, &context, sentiment.label)
            .await?;

        let turn_id = Uuid::new_v4().to_string();
        let illustration = self.illustrator.illustrate(query, &turn_id).await;

        // Ordinal: answered prior turns only. The context already contains
        // exactly those, so its length is the index; standalone turns get 0.
        let turn_index = if request.session_id.is_some() {
            context.len() as i64
        } else {
            0
        };

        let record = TurnRecord {
            id: turn_id.clone(),
            session_id: request.session_id.clone(),
            turn_index,
            query_text: query.to_string(),
            modality: request.modality.as_str().to_string(),
            transcript: match request.modality {
                Modality::Voice => request.transcript.clone(),
                _ => None,
            },
            sentiment_label: sentiment.label.as_str().to_string(),
            sentiment_score: sentiment.score,
            simplified_answer: response.simplified.clone(),
            detailed_answer: Some(response.detailed.clone()),
            language: request.language.clone().unwrap_or_else(|| "en".to_string()),
            illustration_url: illustration.url.clone(),
            illustration_kind: illustration_kind(illustration.source),
            created_at: chrono::Utc::now(),
        };

        let saved = match self.store.insert_turn(&record).await {
            Ok(()) => {
                if let Some(chat_id) = request.chat_id.as_deref() {
                    if let Err(e) = self.store.touch_chat(chat_id).await {
                        warn!(error = %e, chat_id, "failed to touch chat");
                    }
                }
                true
            }
            Err(e) => {
                warn!(error = %e, turn_id = %turn_id, "turn not saved; returning computed results");
                false
            }
        };

        info!(
            turn_id = %turn_id,
            index = turn_index,
            label = sentiment.label.as_str(),
            saved,
            "turn completed"
        );

        Ok(TurnOutcome {
            turn_id,
            session_id: request.session_id,
            turn_index,
            sentiment,
            simplified_answer: response.simplified,
            detailed_answer: response.detailed,
            degraded: response.degraded,
            illustration,
            saved,
        })
    }

    /// Standalone illustration, usable without a full turn.
    pub async fn illustrate(&self, query: &str) -> Illustration {
        let id = Uuid::new_v4().to_string();
        self.illustrator.illustrate(query, &id).await
    }

    /// Standalone sentiment classification.
    pub async fn classify_sentiment(&self, text: &str) -> tutor_core::Result<Sentiment> {
        if text.trim().is_empty() {
            return Err(TutorError::EmptyQuery);
        }
        self.classifier.classify(text.trim()).await
    }

    /// Creates a chat with its first session.
    pub async fn new_chat(&self) -> tutor_core::Result<(ChatRecord, String)> {
        self.store
            .create_chat()
            .await
            .map_err(|e| TutorError::Storage(e.to_string()))
    }

    /// All chats, most recently active first.
    pub async fn list_chats(&self) -> tutor_core::Result<Vec<ChatRecord>> {
        self.store
            .list_chats()
            .await
            .map_err(|e| TutorError::Storage(e.to_string()))
    }

    pub async fn rename_chat(&self, chat_id: &str, title: &str) -> tutor_core::Result<ChatRecord> {
        self.store
            .rename_chat(chat_id, title)
            .await
            .map_err(|e| TutorError::Storage(e.to_string()))
    }

    /// Deletes a chat together with its sessions and turns.
    pub async fn delete_chat(&self, chat_id: &str) -> tutor_core::Result<()> {
        self.store
            .delete_chat(chat_id)
            .await
            .map_err(|e| TutorError::Storage(e.to_string()))
    }

    /// History view: user/assistant message projection of the chat's turns.
    pub async fn chat_history(&self, chat_id: &str) -> tutor_core::Result<Vec<ChatMessage>> {
        self.store
            .chat_messages(chat_id)
            .await
            .map_err(|e| TutorError::Storage(e.to_string()))
    }
}

/// Persisted projection of the illustration source; `none` stores no kind.
fn illustration_kind(source: IllustrationSource) -> Option<String> {
    match source {
        IllustrationSource::TopicLibrary => Some("topic_library".to_string()),
        IllustrationSource::GeneratedVector => Some("generated_vector".to_string()),
        IllustrationSource::ReferenceLibrary => Some("reference_library".to_string()),
        IllustrationSource::None => None,
    }
}
