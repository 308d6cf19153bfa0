//! Object store configuration loaded from environment variables.

use std::path::PathBuf;

use crate::error::StorageError;

/// Which backend serves file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Amazon S3 or any S3-compatible service (MinIO, LocalStack).
    S3,
    /// Local filesystem, intended for development and tests.
    Local,
}

/// Object store configuration.
///
/// Credentials and region for the S3 backend come from the standard AWS
/// environment (`AWS_ACCESS_KEY_ID`, `AWS_REGION`, profiles, IMDS) and are
/// not duplicated here.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Selected backend (default: `S3`).
    pub backend: StorageBackend,
    /// Bucket name, required when the backend is `S3`.
    pub bucket: Option<String>,
    /// Custom endpoint URL for S3-compatible services.
    pub endpoint: Option<String>,
    /// Use path-style addressing, required by most S3-compatible services.
    pub force_path_style: bool,
    /// Root directory for the `Local` backend (default: `./blob-data`).
    pub local_root: PathBuf,
}

impl StorageConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default       |
    /// |-----------------------|---------------|
    /// | `STORAGE_BACKEND`     | `s3`          |
    /// | `S3_BUCKET`           | (unset)       |
    /// | `S3_ENDPOINT`         | (unset)       |
    /// | `S3_FORCE_PATH_STYLE` | `false`       |
    /// | `STORAGE_LOCAL_ROOT`  | `./blob-data` |
    pub fn from_env() -> Result<Self, StorageError> {
        let backend = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "s3".into())
            .to_lowercase()
            .as_str()
        {
            "s3" => StorageBackend::S3,
            "local" => StorageBackend::Local,
            other => {
                return Err(StorageError::Config(format!(
                    "Unknown STORAGE_BACKEND '{other}', expected 's3' or 'local'"
                )))
            }
        };

        let bucket = std::env::var("S3_BUCKET").ok();
        let endpoint = std::env::var("S3_ENDPOINT").ok();

        let force_path_style = matches!(
            std::env::var("S3_FORCE_PATH_STYLE")
                .unwrap_or_else(|_| "false".into())
                .to_lowercase()
                .as_str(),
            "true" | "1"
        );

        let local_root = std::env::var("STORAGE_LOCAL_ROOT")
            .unwrap_or_else(|_| "./blob-data".into())
            .into();

        Ok(Self {
            backend,
            bucket,
            endpoint,
            force_path_style,
            local_root,
        })
    }
}
