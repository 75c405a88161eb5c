//! Error types for `recollfox`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for recollfox operations.
#[derive(Error, Debug)]
pub enum RecollfoxError {
    // === Discovery Errors ===
    /// No Firefox profile with a places database could be located.
    #[error("No Firefox profile found")]
    ProfileNotFound,

    /// An explicitly configured source database does not exist.
    #[error("Source database not found: {0}")]
    SourceNotFound(PathBuf),

    // === Source Errors ===
    /// The places database could not be opened or queried.
    #[error("History read failed: {0}")]
    Source(#[from] rusqlite::Error),

    // === Queue Errors ===
    /// A queue artifact could not be written.
    #[error("Queue write failed for {path}: {source}")]
    QueueWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Checkpoint Errors ===
    /// The watermark file could not be persisted.
    #[error("Checkpoint commit failed at {path}: {source}")]
    CheckpointCommit {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecollfoxError {
    #[must_use]
    pub fn queue_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::QueueWrite {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn checkpoint_commit(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CheckpointCommit {
            path: path.into(),
            source,
        }
    }
}

/// Result type using `RecollfoxError`.
pub type Result<T> = std::result::Result<T, RecollfoxError>;
