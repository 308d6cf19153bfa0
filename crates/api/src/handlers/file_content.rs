//! Handlers for raw file content under `/files/{id}/content`.
//!
//! Content lives in the object store; MySQL holds only metadata. Both
//! endpoints resolve the file through its project and owning user first, so
//! content is only reachable under the triple that actually owns it.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use depot_core::error::CoreError;
use depot_core::types::DbId;
use depot_db::models::project_file::ProjectFile;
use depot_db::repositories::ProjectFileRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Scope parameters identifying which project and user a content request
/// acts for. Callers are trusted to supply the right user; authentication
/// happens upstream of this service.
#[derive(Debug, Deserialize)]
pub struct ContentScope {
    pub project_id: DbId,
    pub owning_user_id: DbId,
}

/// Object store key for a file's content.
fn content_key(project_id: DbId, file_id: DbId) -> String {
    format!("projects/{project_id}/files/{file_id}")
}

/// Resolve a file within its owning scope, rejecting directories.
async fn resolve_file(state: &AppState, id: DbId, scope: &ContentScope) -> AppResult<ProjectFile> {
    let file = ProjectFileRepo::find_in_project_for_owner(
        &state.pool,
        id,
        scope.project_id,
        scope.owning_user_id,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "ProjectFile",
        id,
    }))?;

    if file.is_directory() {
        return Err(AppError::Core(CoreError::Validation(
            "Directories have no content".into(),
        )));
    }

    Ok(file)
}

/// PUT /api/v1/files/{id}/content
///
/// Stores the request body verbatim, replacing any previous content.
pub async fn upload(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(scope): Query<ContentScope>,
    body: Bytes,
) -> AppResult<StatusCode> {
    resolve_file(&state, id, &scope).await?;

    state
        .blobs
        .put(&content_key(scope.project_id, id), body)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/files/{id}/content
///
/// Returns the stored bytes as `application/octet-stream`, or 404 if nothing
/// has been uploaded for this file yet.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(scope): Query<ContentScope>,
) -> AppResult<impl IntoResponse> {
    resolve_file(&state, id, &scope).await?;

    let content = state
        .blobs
        .get(&content_key(scope.project_id, id))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FileContent",
            id,
        }))?;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        content,
    ))
}
