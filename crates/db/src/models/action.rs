//! Action entity model.

use sqlx::FromRow;
use taskboard_core::types::DbId;

/// An action row from the `actions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Action {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub notes: String,
    pub completed: bool,
}
