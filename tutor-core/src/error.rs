use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorError {
    #[error("Query text cannot be empty")]
    EmptyQuery,

    #[error("Sentiment classification failed: {0}")]
    Classification(String),

    #[error("Response generation failed: {0}")]
    Generation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, TutorError>;
