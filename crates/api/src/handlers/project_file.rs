//! Handlers for the `/files` resource (metadata only).
//!
//! Raw content lives in the object store and is served by
//! [`crate::handlers::file_content`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use depot_core::error::CoreError;
use depot_core::pagination::Page;
use depot_core::types::DbId;
use depot_db::models::project_file::{
    CreateProjectFile, FileListParams, ProjectFile, UpdateProjectFile,
};
use depot_db::repositories::ProjectFileRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/files
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectFile>,
) -> AppResult<(StatusCode, Json<ProjectFile>)> {
    validate_name(&input.file_name)?;

    let mut file = ProjectFile::new(
        input.project_id,
        input.parent_directory,
        input.file_name,
        input.is_directory.unwrap_or(false),
        input.creation_date.unwrap_or_else(chrono::Utc::now),
    );
    ProjectFileRepo::save(&state.pool, &mut file).await?;

    Ok((StatusCode::CREATED, Json(file)))
}

/// GET /api/v1/files
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FileListParams>,
) -> AppResult<Json<Page<ProjectFile>>> {
    let page = ProjectFileRepo::find_all(&state.pool, &params).await?;
    Ok(Json(page))
}

/// GET /api/v1/files/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectFile>> {
    let file = ProjectFileRepo::find(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectFile",
            id,
        }))?;
    Ok(Json(file))
}

/// PUT /api/v1/files/{id}
///
/// Applies only the provided fields. If no value actually changes, the
/// entity stays clean and no UPDATE is issued.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProjectFile>,
) -> AppResult<Json<ProjectFile>> {
    let mut file = ProjectFileRepo::find(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectFile",
            id,
        }))?;

    if let Some(name) = input.file_name {
        validate_name(&name)?;
        file.set_file_name(name);
    }
    if let Some(parent) = input.parent_directory {
        file.set_parent_directory(Some(parent));
    }
    if let Some(is_directory) = input.is_directory {
        file.set_is_directory(is_directory);
    }
    if let Some(date) = input.creation_date {
        file.set_creation_date(date);
    }

    ProjectFileRepo::save(&state.pool, &mut file).await?;
    Ok(Json(file))
}

/// DELETE /api/v1/files/{id}
///
/// Deleting a directory also removes its descendants (enforced by the
/// database's cascading foreign keys).
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectFileRepo::delete_by_id(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProjectFile",
            id,
        }))
    }
}

/// Validate a file name: non-empty after trimming, at most 255 characters.
fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("file_name must not be empty".into()));
    }
    if name.chars().count() > 255 {
        return Err(CoreError::Validation(
            "file_name must be at most 255 characters".into(),
        ));
    }
    Ok(())
}
