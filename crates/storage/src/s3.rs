//! S3-backed object store.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::store::BlobStore;

/// Object store backed by Amazon S3 or an S3-compatible service.
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Build a client from the shared AWS environment plus `config` overrides.
    pub async fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let bucket = config
            .bucket
            .clone()
            .ok_or_else(|| StorageError::Config("S3_BUCKET is required for the s3 backend".into()))?;

        let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;

        let mut builder =
            aws_sdk_s3::config::Builder::from(&shared).force_path_style(config.force_path_style);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        let client = Client::from_conf(builder.build());
        tracing::info!(bucket = %bucket, "S3 object store initialized");

        Ok(Self { client, bucket })
    }
}

#[async_trait]
impl BlobStore for S3Store {
    async fn put(&self, key: &str, content: Bytes) -> Result<(), StorageError> {
        let size = content.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(content))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(bucket = %self.bucket, key = %key, error = %e, "S3 put failed");
                StorageError::S3(e.to_string())
            })?;

        tracing::debug!(bucket = %self.bucket, key = %key, size, "stored object");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError> {
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                let missing = e
                    .as_service_error()
                    .map(|err| err.is_no_such_key())
                    .unwrap_or(false);
                if missing {
                    return Ok(None);
                }
                tracing::error!(bucket = %self.bucket, key = %key, error = %e, "S3 get failed");
                return Err(StorageError::S3(e.to_string()));
            }
        };

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::S3(format!("Failed to collect object body: {e}")))?;

        Ok(Some(data.into_bytes()))
    }
}
