//! Error types for the journal.

use thiserror::Error;

/// Result type alias for journal operations
pub type Result<T> = std::result::Result<T, JournalError>;

#[derive(Error, Debug)]
pub enum JournalError {
    /// Content was empty after trimming. Recovered at intake, never stored.
    #[error("Invalid entry: {0}")]
    Validation(String),

    /// Underlying SQLite failure. Not retried.
    #[error("Storage error: {0}")]
    Persistence(#[from] rusqlite::Error),

    /// Delete targeted an id that does not exist.
    #[error("Entry {0} not found")]
    NotFound(i64),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
