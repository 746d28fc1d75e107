//! Project entity model.

use sqlx::FromRow;
use taskboard_core::types::DbId;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub completed: bool,
}
