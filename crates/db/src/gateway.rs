//! The persistence gateway the HTTP handlers program against.
//!
//! [`Gateway`] mirrors the repository methods for both tables so handlers
//! can run against PostgreSQL ([`crate::PgGateway`]) or an in-process store
//! ([`crate::MemoryGateway`]) without change.

use async_trait::async_trait;
use taskboard_core::types::DbId;
use taskboard_core::validation::{ActionUpdate, NewAction, ProjectInput};

use crate::models::action::Action;
use crate::models::project::Project;

/// Failure reported by a gateway implementation.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A write would leave a dangling reference.
    #[error("Constraint violated: {0}")]
    Constraint(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// CRUD access to projects and actions.
///
/// Lookups by id return `Ok(None)` for a missing row, and deletes return
/// `Ok(false)`; `Err` is reserved for store failures.
#[async_trait]
pub trait Gateway: Send + Sync {
    // -- projects --

    async fn list_projects(&self) -> GatewayResult<Vec<Project>>;

    async fn find_project(&self, id: DbId) -> GatewayResult<Option<Project>>;

    /// Insert a project; `completed` defaults to `false`.
    async fn insert_project(&self, input: &ProjectInput) -> GatewayResult<Project>;

    async fn update_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> GatewayResult<Option<Project>>;

    /// Remove a project together with its actions.
    async fn remove_project(&self, id: DbId) -> GatewayResult<bool>;

    /// Actions owned by `project_id`, empty when it has none or does not exist.
    async fn project_actions(&self, project_id: DbId) -> GatewayResult<Vec<Action>>;

    // -- actions --

    async fn list_actions(&self) -> GatewayResult<Vec<Action>>;

    async fn find_action(&self, id: DbId) -> GatewayResult<Option<Action>>;

    async fn insert_action(&self, input: &NewAction) -> GatewayResult<Action>;

    async fn update_action(
        &self,
        id: DbId,
        input: &ActionUpdate,
    ) -> GatewayResult<Option<Action>>;

    async fn remove_action(&self, id: DbId) -> GatewayResult<bool>;

    // -- health --

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> GatewayResult<()>;
}
