//! Project file entity model and DTOs.
//!
//! Rows form a tree per project: `parent_directory` is a self-referential
//! optional foreign key (`None` = root level). The model layer stores the
//! `is_directory` flag and the parent reference as given; it does not walk
//! the tree, so rejecting children under non-directories or parent cycles is
//! the caller's responsibility.

use depot_core::error::CoreError;
use depot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::query::SortOrder;

/// The mutable columns of a `project_files` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectFileFields {
    pub project_id: DbId,
    pub parent_directory: Option<DbId>,
    pub file_name: String,
    pub is_directory: bool,
    pub creation_date: Timestamp,
}

/// A project file entity: field snapshot plus change tracking.
///
/// Same discipline as [`Project`](crate::models::project::Project): `id` is
/// `None` until the first save inserts the row, setters mark dirty only on
/// real change, and a clean entity saves as a no-op.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectFile {
    #[serde(rename = "file_id")]
    id: Option<DbId>,
    #[serde(flatten)]
    fields: ProjectFileFields,
    #[serde(skip)]
    dirty: bool,
}

impl ProjectFile {
    /// Construct a fresh, never-persisted file node. Dirty by definition.
    pub fn new(
        project_id: DbId,
        parent_directory: Option<DbId>,
        file_name: String,
        is_directory: bool,
        creation_date: Timestamp,
    ) -> Self {
        Self {
            id: None,
            fields: ProjectFileFields {
                project_id,
                parent_directory,
                file_name,
                is_directory,
                creation_date,
            },
            dirty: true,
        }
    }

    pub fn id(&self) -> Option<DbId> {
        self.id
    }

    pub fn project_id(&self) -> DbId {
        self.fields.project_id
    }

    pub fn parent_directory(&self) -> Option<DbId> {
        self.fields.parent_directory
    }

    pub fn file_name(&self) -> &str {
        &self.fields.file_name
    }

    pub fn is_directory(&self) -> bool {
        self.fields.is_directory
    }

    pub fn creation_date(&self) -> Timestamp {
        self.fields.creation_date
    }

    /// Whether the entity has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_project_id(&mut self, project_id: DbId) {
        if self.fields.project_id != project_id {
            self.fields.project_id = project_id;
            self.dirty = true;
        }
    }

    pub fn set_parent_directory(&mut self, parent_directory: Option<DbId>) {
        if self.fields.parent_directory != parent_directory {
            self.fields.parent_directory = parent_directory;
            self.dirty = true;
        }
    }

    pub fn set_file_name(&mut self, file_name: String) {
        if self.fields.file_name != file_name {
            self.fields.file_name = file_name;
            self.dirty = true;
        }
    }

    pub fn set_is_directory(&mut self, is_directory: bool) {
        if self.fields.is_directory != is_directory {
            self.fields.is_directory = is_directory;
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

/// Raw row shape for hydration. `is_directory` arrives as TINYINT(1) and
/// decodes to a genuine `bool`.
#[derive(Debug, FromRow)]
pub(crate) struct ProjectFileRow {
    pub file_id: DbId,
    pub project_id: DbId,
    pub parent_directory: Option<DbId>,
    pub file_name: String,
    pub is_directory: bool,
    pub creation_date: Timestamp,
}

impl From<ProjectFileRow> for ProjectFile {
    fn from(row: ProjectFileRow) -> Self {
        Self {
            id: Some(row.file_id),
            fields: ProjectFileFields {
                project_id: row.project_id,
                parent_directory: row.parent_directory,
                file_name: row.file_name,
                is_directory: row.is_directory,
                creation_date: row.creation_date,
            },
            dirty: false,
        }
    }
}

/// DTO for creating a new project file.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectFile {
    pub project_id: DbId,
    pub parent_directory: Option<DbId>,
    pub file_name: String,
    /// Defaults to `false` (a regular file) if omitted.
    pub is_directory: Option<bool>,
    /// Defaults to the current time if omitted.
    pub creation_date: Option<Timestamp>,
}

/// DTO for updating an existing project file. All fields are optional;
/// `parent_directory` can only be re-pointed, not cleared, through this DTO.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectFile {
    pub parent_directory: Option<DbId>,
    pub file_name: Option<String>,
    pub is_directory: Option<bool>,
    pub creation_date: Option<Timestamp>,
}

/// Sort fields accepted by project file list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileSortField {
    #[default]
    FileId,
    FileName,
    IsDirectory,
    CreationDate,
}

impl FileSortField {
    /// Column name interpolated into ORDER BY. Fixed identifiers only.
    pub fn as_column(self) -> &'static str {
        match self {
            FileSortField::FileId => "file_id",
            FileSortField::FileName => "file_name",
            FileSortField::IsDirectory => "is_directory",
            FileSortField::CreationDate => "creation_date",
        }
    }
}

impl std::str::FromStr for FileSortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file_id" => Ok(FileSortField::FileId),
            "file_name" => Ok(FileSortField::FileName),
            "is_directory" => Ok(FileSortField::IsDirectory),
            "creation_date" => Ok(FileSortField::CreationDate),
            other => Err(CoreError::Validation(format!(
                "Unrecognized sort field: {other}"
            ))),
        }
    }
}

/// Filter, sort, and pagination options for project file list queries.
///
/// Filters are conjunctive. `file_name` is a substring match; `project_id`
/// and `is_directory` are exact matches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileListParams {
    pub project_id: Option<DbId>,
    pub file_name: Option<String>,
    pub is_directory: Option<bool>,
    pub sort: Option<FileSortField>,
    pub order: Option<SortOrder>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
