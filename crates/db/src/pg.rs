//! PostgreSQL-backed [`Gateway`].

use async_trait::async_trait;
use taskboard_core::types::DbId;
use taskboard_core::validation::{ActionUpdate, NewAction, ProjectInput};

use crate::gateway::{Gateway, GatewayResult};
use crate::models::action::Action;
use crate::models::project::Project;
use crate::repositories::{ActionRepo, ProjectRepo};
use crate::DbPool;

/// Delegates every call to the repositories over a shared pool.
#[derive(Clone)]
pub struct PgGateway {
    pool: DbPool,
}

impl PgGateway {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Gateway for PgGateway {
    async fn list_projects(&self) -> GatewayResult<Vec<Project>> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn find_project(&self, id: DbId) -> GatewayResult<Option<Project>> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_project(&self, input: &ProjectInput) -> GatewayResult<Project> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> GatewayResult<Option<Project>> {
        Ok(ProjectRepo::update(&self.pool, id, input).await?)
    }

    async fn remove_project(&self, id: DbId) -> GatewayResult<bool> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }

    async fn project_actions(&self, project_id: DbId) -> GatewayResult<Vec<Action>> {
        Ok(ActionRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn list_actions(&self) -> GatewayResult<Vec<Action>> {
        Ok(ActionRepo::list(&self.pool).await?)
    }

    async fn find_action(&self, id: DbId) -> GatewayResult<Option<Action>> {
        Ok(ActionRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_action(&self, input: &NewAction) -> GatewayResult<Action> {
        Ok(ActionRepo::create(&self.pool, input).await?)
    }

    async fn update_action(
        &self,
        id: DbId,
        input: &ActionUpdate,
    ) -> GatewayResult<Option<Action>> {
        Ok(ActionRepo::update(&self.pool, id, input).await?)
    }

    async fn remove_action(&self, id: DbId) -> GatewayResult<bool> {
        Ok(ActionRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> GatewayResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
