use std::sync::Arc;

use depot_storage::BlobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: depot_db::DbPool,
    /// Object store holding project file content.
    pub blobs: Arc<dyn BlobStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
