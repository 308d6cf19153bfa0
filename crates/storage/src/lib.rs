//! Object storage for project file content.
//!
//! File metadata lives in MySQL; the bytes themselves live in an object
//! store behind the [`BlobStore`] trait. Two backends are provided: S3 (or
//! any S3-compatible service) for deployments, and a local-filesystem store
//! for development and tests.

pub mod config;
pub mod error;
pub mod local;
pub mod s3;
pub mod store;

pub use config::{StorageBackend, StorageConfig};
pub use error::StorageError;
pub use local::LocalStore;
pub use s3::S3Store;
pub use store::{connect, BlobStore};
