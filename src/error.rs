//! Error types for content generation and favorites persistence.

use thiserror::Error;

use crate::models::MoodKey;

/// Message shown to the user when generation fails
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate content. Please try again.";

/// Failure of a content provider to produce a bundle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("content service unavailable for mood '{mood}': {reason}")]
    Unavailable { mood: MoodKey, reason: String },
}

/// Failure of the underlying key/value store
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to read or write the favorites collection
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("malformed favorites data: {0}")]
    Json(#[from] serde_json::Error),
}
