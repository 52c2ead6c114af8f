//! Error types for the task client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the backend or the local snapshot
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request failed or the response was malformed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Replace targeted an identifier the server does not know
    #[error("Task not found: {task_id}")]
    TaskNotFound { task_id: String },

    /// Snapshot file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted snapshot is corrupt
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
