//! Error types for the object storage layer.

use thiserror::Error;

/// Errors produced by object store backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage configuration error: {0}")]
    Config(String),

    #[error("S3 request failed: {0}")]
    S3(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
