//! # Prompt
//!
//! Formats session context and builds the prompt variants sent to the
//! text-generation service.
//!
//! ## Format
//!
//! - **Session context**: prior turns as `Q: {query}\nA: {answer}` blocks,
//!   joined with newlines. Empty context is valid (first turn in a session).
//! - **Tutor prompt**: affect-aware framing naming the sentiment label, the
//!   context block, then the new question.
//! - **Templates**: detailed, simplified (asks for brevity explicitly), and
//!   compression (2-3 sentence summary of an already-generated answer).
//!
//! ## External interactions
//!
//! Output strings are consumed by the `llm-client` generation seam.

/// One prior question/answer exchange used for context reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextPair {
    pub query: String,
    pub answer: String,
}

impl ContextPair {
    pub fn new(query: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            answer: answer.into(),
        }
    }
}

/// Formats prior turns as `Q: ...\nA: ...` blocks joined by newlines.
///
/// Returns an empty string for an empty context.
pub fn format_session_context(pairs: &[ContextPair]) -> String {
    pairs
        .iter()
        .map(|p| format!("Q: {}\nA: {}", p.query, p.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the affect-aware base prompt: framing, context, new question.
///
/// `sentiment` is the lowercase label ("positive" / "neutral" / "negative").
pub fn tutor_prompt(query: &str, context: &str, sentiment: &str) -> String {
    format!(
        "You are a friendly, emotionally intelligent STEM tutor.\n\
         The student is feeling {sentiment}.\n\
         \n\
         {context}\n\
         \n\
         Now answer this:\n\
         Q: {query}\n"
    )
}

/// Detailed tier: thorough explanation of the base prompt.
pub fn detailed_request(base_prompt: &str) -> String {
    format!("{base_prompt}\nGive a thorough, step-by-step explanation.")
}

/// Simplified tier: the template asks for brevity explicitly.
pub fn simplified_request(base_prompt: &str) -> String {
    format!("{base_prompt}\nAnswer in plain language, in no more than four short sentences.")
}

/// Compression fallback: derive a brief answer from an already-generated one.
pub fn compression_request(detailed_answer: &str) -> String {
    format!("Explain this briefly in 2-3 sentences:\n{detailed_answer}")
}
