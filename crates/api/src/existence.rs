//! Existence checks run before dependent operations.
//!
//! Two flavours: looking up the entity addressed by the request path
//! (missing → `NotFound`), and confirming a foreign id carried in the
//! payload (missing → `ReferenceNotFound`). Both answer 404; they differ in
//! the error code and message.

use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_db::models::action::Action;
use taskboard_db::models::project::Project;
use taskboard_db::Gateway;

use crate::error::AppResult;

/// Fetch the project addressed by the request path.
pub async fn find_project(gateway: &dyn Gateway, id: DbId) -> AppResult<Project> {
    gateway
        .find_project(id)
        .await?
        .ok_or_else(|| project_not_found(id).into())
}

/// Fetch the action addressed by the request path.
pub async fn find_action(gateway: &dyn Gateway, id: DbId) -> AppResult<Action> {
    gateway
        .find_action(id)
        .await?
        .ok_or_else(|| action_not_found(id).into())
}

/// Confirm that a `project_id` taken from a payload resolves.
pub async fn project_exists(gateway: &dyn Gateway, project_id: DbId) -> AppResult<()> {
    match gateway.find_project(project_id).await? {
        Some(_) => Ok(()),
        None => {
            tracing::debug!(project_id, "Rejecting write that references a missing project");
            Err(CoreError::ReferenceNotFound {
                entity: "Project",
                id: project_id,
            }
            .into())
        }
    }
}

pub fn project_not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Project",
        id,
    }
}

pub fn action_not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Action",
        id,
    }
}
