//! Repository for the `projects` table.

use depot_core::pagination::{clamp_limit, clamp_offset, Page, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use depot_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::project::{Project, ProjectListParams, ProjectRow};
use crate::query::{bind_values, bind_values_scalar, Filter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "project_id, owning_user_id, project_name, creation_date";

/// Provides persistence operations for project entities.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Find a project by its primary key.
    pub async fn find(pool: &MySqlPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE project_id = ?");
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Project::from))
    }

    /// List projects with filtering, sorting, and pagination.
    ///
    /// Two-phase read: a COUNT over the filtered set for `total`, then the
    /// bounded page. Filter values are always bound, positionally ahead of
    /// limit/offset; the ORDER BY identifiers come from the
    /// [`ProjectSortField`](crate::models::project::ProjectSortField) and
    /// [`SortOrder`](crate::query::SortOrder) allow-lists.
    pub async fn find_all(
        pool: &MySqlPool,
        params: &ProjectListParams,
    ) -> Result<Page<Project>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(params.offset);
        let sort = params.sort.unwrap_or_default();
        let order = params.order.unwrap_or_default();

        let filter = build_project_filter(params);
        let where_clause = filter.where_clause();

        let count_query = format!("SELECT COUNT(*) FROM projects {where_clause}");
        let total = bind_values_scalar(sqlx::query_scalar::<_, i64>(&count_query), filter.binds())
            .fetch_one(pool)
            .await?;

        let data_query = format!(
            "SELECT {COLUMNS} FROM projects {where_clause} \
             ORDER BY {} {} LIMIT ? OFFSET ?",
            sort.as_column(),
            order.as_sql()
        );
        let rows = bind_values(sqlx::query_as::<_, ProjectRow>(&data_query), filter.binds())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        Ok(Page {
            items: rows.into_iter().map(Project::from).collect(),
            total,
        })
    }

    /// Persist the entity if it has unsaved changes.
    ///
    /// Clean entities are a no-op: no statement is issued. A dirty entity
    /// without an id INSERTs and adopts the generated key; a dirty entity
    /// with an id writes every mutable column back in one UPDATE keyed by
    /// the primary key. The dirty flag clears only after the statement
    /// succeeds.
    pub async fn save(pool: &MySqlPool, project: &mut Project) -> Result<(), sqlx::Error> {
        if !project.is_dirty() {
            return Ok(());
        }

        match project.id() {
            None => {
                let result = sqlx::query(
                    "INSERT INTO projects (owning_user_id, project_name, creation_date) \
                     VALUES (?, ?, ?)",
                )
                .bind(project.owning_user_id())
                .bind(project.project_name())
                .bind(project.creation_date())
                .execute(pool)
                .await?;
                project.adopt_id(result.last_insert_id() as DbId);
            }
            Some(id) => {
                sqlx::query(
                    "UPDATE projects \
                     SET owning_user_id = ?, project_name = ?, creation_date = ? \
                     WHERE project_id = ?",
                )
                .bind(project.owning_user_id())
                .bind(project.project_name())
                .bind(project.creation_date())
                .bind(id)
                .execute(pool)
                .await?;
            }
        }

        project.mark_clean();
        Ok(())
    }

    /// Delete a project by id in a single conditional statement.
    ///
    /// Returns `true` if a row was removed, `false` if none existed. There
    /// is no prior existence check, so concurrent deleters cannot race.
    pub async fn delete_by_id(pool: &MySqlPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE project_id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build the WHERE filter for project list queries.
fn build_project_filter(params: &ProjectListParams) -> Filter {
    let mut filter = Filter::new();

    if let Some(ref name) = params.project_name {
        filter.like("project_name", name);
    }

    if let Some(owner) = params.owning_user_id {
        filter.eq_bigint("owning_user_id", owner);
    }

    filter
}
