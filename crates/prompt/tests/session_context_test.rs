//! Tests for session-context formatting and the prompt templates.

use prompt::{
    compression_request, detailed_request, format_session_context, simplified_request,
    tutor_prompt, ContextPair,
};

/// **Test: Context round-trip for two answered turns.**
///
/// **Setup:** Pairs ("Q1","A1") and ("Q2","A2").
/// **Action:** `format_session_context`.
/// **Expected:** Exactly `"Q: Q1\nA: A1\nQ: Q2\nA: A2"`.
#[test]
fn test_format_session_context_two_pairs() {
    let pairs = vec![ContextPair::new("Q1", "A1"), ContextPair::new("Q2", "A2")];
    assert_eq!(
        format_session_context(&pairs),
        "Q: Q1\nA: A1\nQ: Q2\nA: A2"
    );
}

/// **Test: Empty context is valid and formats to the empty string.**
#[test]
fn test_format_session_context_empty() {
    assert_eq!(format_session_context(&[]), "");
}

/// **Test: Tutor prompt names the sentiment and ends with the new question.**
#[test]
fn test_tutor_prompt_structure() {
    let prompt = tutor_prompt("What is friction?", "Q: Q1\nA: A1", "negative");
    assert!(prompt.contains("The student is feeling negative."));
    assert!(prompt.contains("Q: Q1\nA: A1"));
    assert!(prompt.ends_with("Now answer this:\nQ: What is friction?\n"));
}

#[test]
fn test_templates_extend_base_prompt() {
    let base = "BASE";
    assert!(detailed_request(base).starts_with("BASE\n"));
    assert!(simplified_request(base).contains("no more than four short sentences"));
    assert!(compression_request("long answer").starts_with("Explain this briefly in 2-3 sentences:\n"));
    assert!(compression_request("long answer").ends_with("long answer"));
}
