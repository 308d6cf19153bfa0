pub mod health;
pub mod project;
pub mod project_file;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                list, create
/// /projects/{id}           get, update, delete
///
/// /files                   list, create
/// /files/{id}              get, update, delete
/// /files/{id}/content      download, upload (GET, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Project CRUD.
        .nest("/projects", project::router())
        // Project file CRUD plus raw content access.
        .nest("/files", project_file::router())
}
