//! Repository for the `project_files` table.

use depot_core::pagination::{clamp_limit, clamp_offset, Page, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use depot_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::project_file::{FileListParams, ProjectFile, ProjectFileRow};
use crate::query::{bind_values, bind_values_scalar, Filter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "file_id, project_id, parent_directory, file_name, is_directory, creation_date";

/// Provides persistence operations for project file entities.
pub struct ProjectFileRepo;

impl ProjectFileRepo {
    /// Find a file by its primary key.
    pub async fn find(pool: &MySqlPool, id: DbId) -> Result<Option<ProjectFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_files WHERE file_id = ?");
        let row = sqlx::query_as::<_, ProjectFileRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(ProjectFile::from))
    }

    /// Resolve a file only if it belongs to the given project AND that
    /// project belongs to the given user.
    ///
    /// Implemented as a join against `projects` so ownership is checked in
    /// one round-trip. Returns `Ok(None)` when any of the three identifiers
    /// does not line up.
    pub async fn find_in_project_for_owner(
        pool: &MySqlPool,
        file_id: DbId,
        project_id: DbId,
        owning_user_id: DbId,
    ) -> Result<Option<ProjectFile>, sqlx::Error> {
        let row = sqlx::query_as::<_, ProjectFileRow>(
            "SELECT pf.file_id, pf.project_id, pf.parent_directory, \
                    pf.file_name, pf.is_directory, pf.creation_date \
             FROM project_files pf \
             JOIN projects p ON p.project_id = pf.project_id \
             WHERE pf.file_id = ? AND pf.project_id = ? AND p.owning_user_id = ?",
        )
        .bind(file_id)
        .bind(project_id)
        .bind(owning_user_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(ProjectFile::from))
    }

    /// List files with filtering, sorting, and pagination.
    ///
    /// Same two-phase shape as the project listing: COUNT for `total`, then
    /// the bounded page, with filter values bound ahead of limit/offset and
    /// sort identifiers drawn from the
    /// [`FileSortField`](crate::models::project_file::FileSortField)
    /// allow-list.
    pub async fn find_all(
        pool: &MySqlPool,
        params: &FileListParams,
    ) -> Result<Page<ProjectFile>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(params.offset);
        let sort = params.sort.unwrap_or_default();
        let order = params.order.unwrap_or_default();

        let filter = build_file_filter(params);
        let where_clause = filter.where_clause();

        let count_query = format!("SELECT COUNT(*) FROM project_files {where_clause}");
        let total = bind_values_scalar(sqlx::query_scalar::<_, i64>(&count_query), filter.binds())
            .fetch_one(pool)
            .await?;

        let data_query = format!(
            "SELECT {COLUMNS} FROM project_files {where_clause} \
             ORDER BY {} {} LIMIT ? OFFSET ?",
            sort.as_column(),
            order.as_sql()
        );
        let rows = bind_values(
            sqlx::query_as::<_, ProjectFileRow>(&data_query),
            filter.binds(),
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(Page {
            items: rows.into_iter().map(ProjectFile::from).collect(),
            total,
        })
    }

    /// Persist the entity if it has unsaved changes.
    ///
    /// Same contract as `ProjectRepo::save`: clean entities issue no
    /// statement, first saves INSERT and adopt the generated key, later
    /// saves write every mutable column in one UPDATE.
    pub async fn save(pool: &MySqlPool, file: &mut ProjectFile) -> Result<(), sqlx::Error> {
        if !file.is_dirty() {
            return Ok(());
        }

        match file.id() {
            None => {
                let result = sqlx::query(
                    "INSERT INTO project_files \
                     (project_id, parent_directory, file_name, is_directory, creation_date) \
                     VALUES (?, ?, ?, ?, ?)",
                )
                .bind(file.project_id())
                .bind(file.parent_directory())
                .bind(file.file_name())
                .bind(file.is_directory())
                .bind(file.creation_date())
                .execute(pool)
                .await?;
                file.adopt_id(result.last_insert_id() as DbId);
            }
            Some(id) => {
                sqlx::query(
                    "UPDATE project_files \
                     SET project_id = ?, parent_directory = ?, file_name = ?, \
                         is_directory = ?, creation_date = ? \
                     WHERE file_id = ?",
                )
                .bind(file.project_id())
                .bind(file.parent_directory())
                .bind(file.file_name())
                .bind(file.is_directory())
                .bind(file.creation_date())
                .bind(id)
                .execute(pool)
                .await?;
            }
        }

        file.mark_clean();
        Ok(())
    }

    /// Delete a file by id in a single conditional statement.
    ///
    /// Returns `true` if a row was removed, `false` if none existed.
    pub async fn delete_by_id(pool: &MySqlPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_files WHERE file_id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build the WHERE filter for file list queries.
fn build_file_filter(params: &FileListParams) -> Filter {
    let mut filter = Filter::new();

    if let Some(project_id) = params.project_id {
        filter.eq_bigint("project_id", project_id);
    }

    if let Some(ref name) = params.file_name {
        filter.like("file_name", name);
    }

    if let Some(is_directory) = params.is_directory {
        filter.eq_bool("is_directory", is_directory);
    }

    filter
}
