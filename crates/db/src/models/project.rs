//! Project entity model and DTOs.

use depot_core::error::CoreError;
use depot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::query::SortOrder;

/// The mutable columns of a `projects` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectFields {
    pub owning_user_id: DbId,
    pub project_name: String,
    pub creation_date: Timestamp,
}

/// A project entity: field snapshot plus change tracking.
///
/// `id` is `None` until the first successful save inserts the row and adopts
/// the generated key. Setters mark the entity dirty only when the value
/// actually changes; `ProjectRepo::save` is a no-op for clean entities.
///
/// Serializes to a fixed shape of all columns including the identity:
/// `{"project_id", "owning_user_id", "project_name", "creation_date"}`.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    #[serde(rename = "project_id")]
    id: Option<DbId>,
    #[serde(flatten)]
    fields: ProjectFields,
    #[serde(skip)]
    dirty: bool,
}

impl Project {
    /// Construct a fresh, never-persisted project. Dirty by definition: it
    /// differs from storage until the first save inserts it.
    pub fn new(owning_user_id: DbId, project_name: String, creation_date: Timestamp) -> Self {
        Self {
            id: None,
            fields: ProjectFields {
                owning_user_id,
                project_name,
                creation_date,
            },
            dirty: true,
        }
    }

    pub fn id(&self) -> Option<DbId> {
        self.id
    }

    pub fn owning_user_id(&self) -> DbId {
        self.fields.owning_user_id
    }

    pub fn project_name(&self) -> &str {
        &self.fields.project_name
    }

    pub fn creation_date(&self) -> Timestamp {
        self.fields.creation_date
    }

    /// Whether the entity has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_owning_user_id(&mut self, owning_user_id: DbId) {
        if self.fields.owning_user_id != owning_user_id {
            self.fields.owning_user_id = owning_user_id;
            self.dirty = true;
        }
    }

    pub fn set_project_name(&mut self, project_name: String) {
        if self.fields.project_name != project_name {
            self.fields.project_name = project_name;
            self.dirty = true;
        }
    }

    pub fn set_creation_date(&mut self, creation_date: Timestamp) {
        if self.fields.creation_date != creation_date {
            self.fields.creation_date = creation_date;
            self.dirty = true;
        }
    }

    /// Adopt the key generated by the first INSERT.
    pub(crate) fn adopt_id(&mut self, id: DbId) {
        self.id = Some(id);
    }

    /// Clear the dirty flag after a successful write.
    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

/// Raw row shape for hydration.
#[derive(Debug, FromRow)]
pub(crate) struct ProjectRow {
    pub project_id: DbId,
    pub owning_user_id: DbId,
    pub project_name: String,
    pub creation_date: Timestamp,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: Some(row.project_id),
            fields: ProjectFields {
                owning_user_id: row.owning_user_id,
                project_name: row.project_name,
                creation_date: row.creation_date,
            },
            dirty: false,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub owning_user_id: DbId,
    pub project_name: String,
    /// Defaults to the current time if omitted.
    pub creation_date: Option<Timestamp>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub owning_user_id: Option<DbId>,
    pub project_name: Option<String>,
    pub creation_date: Option<Timestamp>,
}

/// Sort fields accepted by project list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSortField {
    #[default]
    ProjectId,
    OwningUserId,
    ProjectName,
    CreationDate,
}

impl ProjectSortField {
    /// Column name interpolated into ORDER BY. Fixed identifiers only.
    pub fn as_column(self) -> &'static str {
        match self {
            ProjectSortField::ProjectId => "project_id",
            ProjectSortField::OwningUserId => "owning_user_id",
            ProjectSortField::ProjectName => "project_name",
            ProjectSortField::CreationDate => "creation_date",
        }
    }
}

impl std::str::FromStr for ProjectSortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project_id" => Ok(ProjectSortField::ProjectId),
            "owning_user_id" => Ok(ProjectSortField::OwningUserId),
            "project_name" => Ok(ProjectSortField::ProjectName),
            "creation_date" => Ok(ProjectSortField::CreationDate),
            other => Err(CoreError::Validation(format!(
                "Unrecognized sort field: {other}"
            ))),
        }
    }
}

/// Filter, sort, and pagination options for project list queries.
///
/// Filters are conjunctive. `project_name` is a substring match;
/// `owning_user_id` is an exact match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListParams {
    pub project_name: Option<String>,
    pub owning_user_id: Option<DbId>,
    pub sort: Option<ProjectSortField>,
    pub order: Option<SortOrder>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn hydrated() -> Project {
        Project::from(ProjectRow {
            project_id: 42,
            owning_user_id: 7,
            project_name: "Skyline".to_string(),
            creation_date: "2024-05-01T12:00:00Z".parse().unwrap(),
        })
    }

    // -- Dirty tracking ------------------------------------------------------

    #[test]
    fn fresh_project_is_dirty_with_no_id() {
        let project = Project::new(1, "New".to_string(), chrono::Utc::now());
        assert!(project.is_dirty());
        assert_eq!(project.id(), None);
    }

    #[test]
    fn hydrated_project_is_clean_with_id() {
        let project = hydrated();
        assert!(!project.is_dirty());
        assert_eq!(project.id(), Some(42));
    }

    #[test]
    fn setting_same_value_does_not_mark_dirty() {
        let mut project = hydrated();
        project.set_project_name("Skyline".to_string());
        project.set_owning_user_id(7);
        project.set_creation_date("2024-05-01T12:00:00Z".parse().unwrap());
        assert!(!project.is_dirty());
    }

    #[test]
    fn setting_different_value_marks_dirty() {
        let mut project = hydrated();
        project.set_project_name("Renamed".to_string());
        assert!(project.is_dirty());
        assert_eq!(project.project_name(), "Renamed");
    }

    #[test]
    fn mark_clean_resets_dirty_flag() {
        let mut project = hydrated();
        project.set_owning_user_id(8);
        assert!(project.is_dirty());
        project.mark_clean();
        assert!(!project.is_dirty());
    }

    // -- Serialization -------------------------------------------------------

    #[test]
    fn serializes_all_fields_including_identity() {
        let json = serde_json::to_value(hydrated()).unwrap();
        assert_eq!(json["project_id"], 42);
        assert_eq!(json["owning_user_id"], 7);
        assert_eq!(json["project_name"], "Skyline");
        assert!(json["creation_date"].is_string());
        assert!(json.get("dirty").is_none());
    }

    #[test]
    fn unsaved_project_serializes_null_identity() {
        let project = Project::new(1, "Draft".to_string(), chrono::Utc::now());
        let json = serde_json::to_value(project).unwrap();
        assert!(json["project_id"].is_null());
    }

    // -- Sort field allow-list -----------------------------------------------

    #[test]
    fn sort_field_parses_allow_listed_columns() {
        assert_eq!(
            ProjectSortField::from_str("project_name").unwrap(),
            ProjectSortField::ProjectName
        );
        assert_eq!(
            ProjectSortField::from_str("creation_date").unwrap(),
            ProjectSortField::CreationDate
        );
    }

    #[test]
    fn sort_field_rejects_unknown_identifiers() {
        assert!(ProjectSortField::from_str("1;DROP TABLE projects").is_err());
        assert!(ProjectSortField::from_str("name").is_err());
        assert!(ProjectSortField::from_str("").is_err());
    }

    #[test]
    fn sort_field_default_is_primary_key() {
        assert_eq!(
            ProjectSortField::default().as_column(),
            "project_id"
        );
    }
}
