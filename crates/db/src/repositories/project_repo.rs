//! Repository for the `projects` table.

use sqlx::PgPool;
use taskboard_core::types::DbId;
use taskboard_core::validation::ProjectInput;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, completed";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `completed` is `None` in the input, defaults to `false`.
    pub async fn create(pool: &PgPool, input: &ProjectInput) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, completed)
             VALUES ($1, $2, COALESCE($3, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.completed)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Replace a project's name and description. `completed` is only
    /// written when present in `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjectInput,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = $2,
                description = $3,
                completed = COALESCE($4, completed)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Its actions go with it (`ON DELETE CASCADE`).
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
