//! Repository for the `actions` table.

use sqlx::PgPool;
use taskboard_core::types::DbId;
use taskboard_core::validation::{ActionUpdate, NewAction};

use crate::models::action::Action;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, description, notes, completed";

/// Provides CRUD operations for actions.
pub struct ActionRepo;

impl ActionRepo {
    /// Insert a new action, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewAction) -> Result<Action, sqlx::Error> {
        let query = format!(
            "INSERT INTO actions (project_id, description, notes, completed)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Action>(&query)
            .bind(input.project_id)
            .bind(&input.description)
            .bind(&input.notes)
            .bind(input.completed)
            .fetch_one(pool)
            .await
    }

    /// Find an action by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Action>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actions WHERE id = $1");
        sqlx::query_as::<_, Action>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all actions in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Action>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actions ORDER BY id");
        sqlx::query_as::<_, Action>(&query).fetch_all(pool).await
    }

    /// List the actions belonging to a project. An unknown project yields
    /// an empty list.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Action>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actions WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Action>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Replace an action's description and notes. `project_id` and
    /// `completed` are only written when present in `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ActionUpdate,
    ) -> Result<Option<Action>, sqlx::Error> {
        let query = format!(
            "UPDATE actions SET
                project_id = COALESCE($2, project_id),
                description = $3,
                notes = $4,
                completed = COALESCE($5, completed)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Action>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.description)
            .bind(&input.notes)
            .bind(input.completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete an action by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
