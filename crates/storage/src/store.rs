//! The object store abstraction and backend selection.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::StorageError;
use crate::local::LocalStore;
use crate::s3::S3Store;

/// Byte-oriented object storage keyed by opaque string paths.
///
/// Implementations must return exactly the bytes previously written for a
/// key, and report a missing key as `Ok(None)` rather than an error.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `content` under `key`, replacing any previous value.
    async fn put(&self, key: &str, content: Bytes) -> Result<(), StorageError>;

    /// Fetch the content stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError>;
}

/// Build the backend selected by `config`.
pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn BlobStore>, StorageError> {
    match config.backend {
        StorageBackend::S3 => Ok(Arc::new(S3Store::from_config(config).await?)),
        StorageBackend::Local => Ok(Arc::new(LocalStore::new(config.local_root.clone()))),
    }
}
