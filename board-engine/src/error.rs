//! Error types for the board engine

use thiserror::Error;

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur at the persistence boundary.
///
/// Store mutations never fail — unknown ids are silent no-ops — so only
/// storage I/O produces errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Lock is held by another process
    #[error("storage lock busy - another writer holds it")]
    LockBusy,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
