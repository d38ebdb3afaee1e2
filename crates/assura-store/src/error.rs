//! Error types for measurement storage

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by measurement stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure while reading or writing a snapshot
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded or decoded
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
