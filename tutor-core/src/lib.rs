//! Core types shared across the tutoring backend.
//!
//! ## Modules
//!
//! - [`types`] – sentiment, modality, and illustration types
//! - [`error`] – TutorError taxonomy and crate Result alias
//! - [`logger`] – tracing initialization

pub mod error;
pub mod logger;
pub mod types;

pub use error::{Result, TutorError};
pub use types::{
    Explanation, Illustration, IllustrationSource, Modality, Sentiment, SentimentLabel,
};
