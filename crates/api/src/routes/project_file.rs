//! Route definitions for the `/files` resource.
//!
//! Metadata CRUD lives at the collection root; raw content for a single
//! file is a sub-resource at `/{id}/content`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{file_content, project_file};
use crate::state::AppState;

/// Routes mounted at `/files`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/content   -> download
/// PUT    /{id}/content   -> upload
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project_file::list).post(project_file::create))
        .route(
            "/{id}",
            get(project_file::get_by_id)
                .put(project_file::update)
                .delete(project_file::delete),
        )
        .route(
            "/{id}/content",
            get(file_content::download).put(file_content::upload),
        )
}
