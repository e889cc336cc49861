//! Storage crate: turn and chat persistence for the tutoring backend.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – TurnRecord, ChatRecord, ChatMessage
//! - [`store`] – TurnStore trait (the persistence seam)
//! - [`turn_repo`] – TurnRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod sqlite_pool;
mod store;
mod turn_repo;

pub use error::StorageError;
pub use models::{ChatMessage, ChatRecord, TurnRecord};
pub use sqlite_pool::SqlitePoolManager;
pub use store::TurnStore;
pub use turn_repo::TurnRepository;
