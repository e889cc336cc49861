//! Integration tests for [`storage::TurnRepository`].
//!
//! Covers ordinal computation, session-context reconstruction, and the chat
//! history projection using an in-memory SQLite database.

use storage::{TurnRecord, TurnRepository, TurnStore};

async fn repo() -> TurnRepository {
    TurnRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository")
}

fn turn(
    session_id: Option<&str>,
    turn_index: i64,
    query: &str,
    detailed: Option<&str>,
) -> TurnRecord {
    TurnRecord::new(
        session_id.map(String::from),
        turn_index,
        query.to_string(),
        "text".to_string(),
        None,
        "NEUTRAL".to_string(),
        0.0,
        None,
        detailed.map(String::from),
        "en".to_string(),
        None,
        None,
    )
}

/// **Test: Ordinal counts only answered turns.**
///
/// **Setup:** Session with 3 turns; 2 have a detailed answer, 1 has none.
/// **Action:** `answered_turn_count(session)`.
/// **Expected:** 2 — the next turn's ordinal, skipping the unanswered turn.
#[tokio::test]
async fn test_answered_turn_count_skips_unanswered() {
    let repo = repo().await;
    let session = "s1";

    repo.insert_turn(&turn(Some(session), 0, "Q1", Some("A1")))
        .await
        .expect("insert");
    repo.insert_turn(&turn(Some(session), 1, "Q2", None))
        .await
        .expect("insert");
    repo.insert_turn(&turn(Some(session), 1, "Q3", Some("A3")))
        .await
        .expect("insert");

    let count = repo.answered_turn_count(session).await.expect("count");
    assert_eq!(count, 2);
}

/// **Test: Session context keeps order and skips unanswered turns.**
///
/// **Setup:** Turns (Q1, A1), (Q2, no answer), (Q3, A3) with indexes 0,1,2.
/// **Action:** `session_context` then `prompt::format_session_context`.
/// **Expected:** `"Q: Q1\nA: A1\nQ: Q3\nA: A3"`.
#[tokio::test]
async fn test_session_context_round_trip() {
    let repo = repo().await;
    let session = "s2";

    repo.insert_turn(&turn(Some(session), 0, "Q1", Some("A1")))
        .await
        .expect("insert");
    repo.insert_turn(&turn(Some(session), 1, "Q2", None))
        .await
        .expect("insert");
    repo.insert_turn(&turn(Some(session), 2, "Q3", Some("A3")))
        .await
        .expect("insert");

    let context = repo.session_context(session).await.expect("context");
    assert_eq!(context.len(), 2);
    assert_eq!(
        prompt::format_session_context(&context),
        "Q: Q1\nA: A1\nQ: Q3\nA: A3"
    );
}

/// **Test: Context prefers the detailed answer, falls back to simplified.**
#[tokio::test]
async fn test_session_context_prefers_detailed() {
    let repo = repo().await;
    let session = "s3";

    let mut simplified_only = turn(Some(session), 0, "Q1", None);
    simplified_only.simplified_answer = Some("S1".to_string());
    repo.insert_turn(&simplified_only).await.expect("insert");

    let mut both = turn(Some(session), 1, "Q2", Some("D2"));
    both.simplified_answer = Some("S2".to_string());
    repo.insert_turn(&both).await.expect("insert");

    let context = repo.session_context(session).await.expect("context");
    assert_eq!(context[0].answer, "S1");
    assert_eq!(context[1].answer, "D2");
}

/// **Test: Standalone turns (no session) persist and read back.**
#[tokio::test]
async fn test_standalone_turn_round_trip() {
    let repo = repo().await;
    let record = turn(None, 0, "standalone question", Some("answer"));

    repo.insert_turn(&record).await.expect("insert");
    let fetched = repo
        .get_turn(&record.id)
        .await
        .expect("get")
        .expect("present");

    assert_eq!(fetched.session_id, None);
    assert_eq!(fetched.turn_index, 0);
    assert_eq!(fetched.query_text, "standalone question");
}

/// **Test: list_turns returns the session in ordinal order.**
#[tokio::test]
async fn test_list_turns_ordered() {
    let repo = repo().await;
    let session = "s4";

    repo.insert_turn(&turn(Some(session), 1, "second", Some("A")))
        .await
        .expect("insert");
    repo.insert_turn(&turn(Some(session), 0, "first", Some("A")))
        .await
        .expect("insert");

    let turns = repo.list_turns(session).await.expect("list");
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].query_text, "first");
    assert_eq!(turns[1].query_text, "second");
}

/// **Test: Chat lifecycle — create, rename, list ordering by activity.**
#[tokio::test]
async fn test_chat_lifecycle() {
    let repo = repo().await;

    let (first, _session1) = repo.create_chat().await.expect("create");
    assert_eq!(first.title, "New Chat");

    let (second, _session2) = repo.create_chat().await.expect("create");

    let renamed = repo
        .rename_chat(&first.id, "Thermodynamics")
        .await
        .expect("rename");
    assert_eq!(renamed.title, "Thermodynamics");

    // Renaming touches last_active, so the renamed chat lists first.
    let chats = repo.list_chats().await.expect("list");
    assert_eq!(chats.len(), 2);
    assert_eq!(chats[0].id, first.id);
    assert_eq!(chats[1].id, second.id);
}

/// **Test: Deleting a chat cascades to its sessions and turns.**
///
/// **Setup:** Two chats; the first has a session with one recorded turn.
/// **Action:** `delete_chat(first)`.
/// **Expected:** The first chat, its turn, and its session rows are gone;
/// the second chat is untouched.
#[tokio::test]
async fn test_delete_chat_cascades() {
    let repo = repo().await;
    let (first, session_id) = repo.create_chat().await.expect("create");
    let (second, _other_session) = repo.create_chat().await.expect("create");

    let record = turn(Some(&session_id), 0, "Q1", Some("A1"));
    repo.insert_turn(&record).await.expect("insert");

    repo.delete_chat(&first.id).await.expect("delete");

    let chats = repo.list_chats().await.expect("list");
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].id, second.id);
    assert!(repo.get_turn(&record.id).await.expect("get").is_none());
    assert!(repo.list_turns(&session_id).await.expect("list").is_empty());
}

/// **Test: Deleting a missing chat returns NotFound.**
#[tokio::test]
async fn test_delete_missing_chat() {
    let repo = repo().await;
    let result = repo.delete_chat("no-such-chat").await;
    assert!(matches!(result, Err(storage::StorageError::NotFound(_))));
}

/// **Test: Renaming a missing chat returns NotFound.**
#[tokio::test]
async fn test_rename_missing_chat() {
    let repo = repo().await;
    let result = repo.rename_chat("no-such-chat", "title").await;
    assert!(matches!(result, Err(storage::StorageError::NotFound(_))));
}

/// **Test: Chat message projection pairs user and assistant entries.**
///
/// **Setup:** Chat with one session holding an answered and an unanswered turn.
/// **Action:** `chat_messages(chat_id)`.
/// **Expected:** 3 messages — user+assistant for the answered turn, user only
/// for the unanswered one; assistant content prefers the detailed answer.
#[tokio::test]
async fn test_chat_messages_projection() {
    let repo = repo().await;
    let (chat, session_id) = repo.create_chat().await.expect("create");

    let mut answered = turn(Some(&session_id), 0, "What is pH?", Some("Detailed pH answer"));
    answered.simplified_answer = Some("Short pH answer".to_string());
    repo.insert_turn(&answered).await.expect("insert");
    repo.insert_turn(&turn(Some(&session_id), 1, "Unanswered?", None))
        .await
        .expect("insert");

    let messages = repo.chat_messages(&chat.id).await.expect("messages");
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].kind, "user");
    assert_eq!(messages[0].content, "What is pH?");
    assert_eq!(messages[1].kind, "assistant");
    assert_eq!(messages[1].content, "Detailed pH answer");
    assert_eq!(
        messages[1].simplified_answer.as_deref(),
        Some("Short pH answer")
    );
    assert_eq!(messages[2].kind, "user");
    assert_eq!(messages[2].content, "Unanswered?");
}
