//! Error types for the storage crate.

use thiserror::Error;

/// Errors that can occur reading or writing stored JSON documents
#[derive(Error, Debug)]
pub enum StoreError {
    /// The named object does not exist in the store
    #[error("no such object: {name}")]
    MissingObject { name: String },

    /// I/O error from the underlying store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document is not valid JSON
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
