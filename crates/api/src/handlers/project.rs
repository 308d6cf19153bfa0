//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use depot_core::error::CoreError;
use depot_core::pagination::Page;
use depot_core::types::DbId;
use depot_db::models::project::{CreateProject, Project, ProjectListParams, UpdateProject};
use depot_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_name(&input.project_name)?;

    let mut project = Project::new(
        input.owning_user_id,
        input.project_name,
        input.creation_date.unwrap_or_else(chrono::Utc::now),
    );
    ProjectRepo::save(&state.pool, &mut project).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<Page<Project>>> {
    let page = ProjectRepo::find_all(&state.pool, &params).await?;
    Ok(Json(page))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
///
/// Applies only the provided fields. If no value actually changes, the
/// entity stays clean and no UPDATE is issued.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let mut project = ProjectRepo::find(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    if let Some(name) = input.project_name {
        validate_name(&name)?;
        project.set_project_name(name);
    }
    if let Some(owner) = input.owning_user_id {
        project.set_owning_user_id(owner);
    }
    if let Some(date) = input.creation_date {
        project.set_creation_date(date);
    }

    ProjectRepo::save(&state.pool, &mut project).await?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete_by_id(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// Validate a project name: non-empty after trimming, at most 255 characters.
fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "project_name must not be empty".into(),
        ));
    }
    if name.chars().count() > 255 {
        return Err(CoreError::Validation(
            "project_name must be at most 255 characters".into(),
        ));
    }
    Ok(())
}
