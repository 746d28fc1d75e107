//! In-process [`Gateway`] used by tests and by the server when no
//! `DATABASE_URL` is configured.
//!
//! Mirrors the SQL schema: ids are assigned sequentially from 1, listings
//! come back in id order, and removing a project cascades to its actions.

use std::collections::BTreeMap;

use async_trait::async_trait;
use taskboard_core::types::DbId;
use taskboard_core::validation::{ActionUpdate, NewAction, ProjectInput};
use tokio::sync::RwLock;

use crate::gateway::{Gateway, GatewayError, GatewayResult};
use crate::models::action::Action;
use crate::models::project::Project;

#[derive(Default)]
struct Tables {
    projects: BTreeMap<DbId, Project>,
    actions: BTreeMap<DbId, Action>,
    last_project_id: DbId,
    last_action_id: DbId,
}

/// Thread-safe via interior `RwLock`; wrap in `Arc` to share.
#[derive(Default)]
pub struct MemoryGateway {
    tables: RwLock<Tables>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Gateway for MemoryGateway {
    async fn list_projects(&self) -> GatewayResult<Vec<Project>> {
        Ok(self.tables.read().await.projects.values().cloned().collect())
    }

    async fn find_project(&self, id: DbId) -> GatewayResult<Option<Project>> {
        Ok(self.tables.read().await.projects.get(&id).cloned())
    }

    async fn insert_project(&self, input: &ProjectInput) -> GatewayResult<Project> {
        let mut tables = self.tables.write().await;
        tables.last_project_id += 1;
        let project = Project {
            id: tables.last_project_id,
            name: input.name.clone(),
            description: input.description.clone(),
            completed: input.completed.unwrap_or(false),
        };
        tables.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> GatewayResult<Option<Project>> {
        let mut tables = self.tables.write().await;
        let Some(project) = tables.projects.get_mut(&id) else {
            return Ok(None);
        };
        project.name = input.name.clone();
        project.description = input.description.clone();
        if let Some(completed) = input.completed {
            project.completed = completed;
        }
        Ok(Some(project.clone()))
    }

    async fn remove_project(&self, id: DbId) -> GatewayResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.projects.remove(&id).is_none() {
            return Ok(false);
        }
        tables.actions.retain(|_, action| action.project_id != id);
        Ok(true)
    }

    async fn project_actions(&self, project_id: DbId) -> GatewayResult<Vec<Action>> {
        Ok(self
            .tables
            .read()
            .await
            .actions
            .values()
            .filter(|action| action.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn list_actions(&self) -> GatewayResult<Vec<Action>> {
        Ok(self.tables.read().await.actions.values().cloned().collect())
    }

    async fn find_action(&self, id: DbId) -> GatewayResult<Option<Action>> {
        Ok(self.tables.read().await.actions.get(&id).cloned())
    }

    async fn insert_action(&self, input: &NewAction) -> GatewayResult<Action> {
        let mut tables = self.tables.write().await;
        if !tables.projects.contains_key(&input.project_id) {
            return Err(GatewayError::Constraint(format!(
                "project {} does not exist",
                input.project_id
            )));
        }
        tables.last_action_id += 1;
        let action = Action {
            id: tables.last_action_id,
            project_id: input.project_id,
            description: input.description.clone(),
            notes: input.notes.clone(),
            completed: input.completed,
        };
        tables.actions.insert(action.id, action.clone());
        Ok(action)
    }

    async fn update_action(
        &self,
        id: DbId,
        input: &ActionUpdate,
    ) -> GatewayResult<Option<Action>> {
        let mut tables = self.tables.write().await;
        if let Some(project_id) = input.project_id {
            if !tables.projects.contains_key(&project_id) {
                return Err(GatewayError::Constraint(format!(
                    "project {project_id} does not exist"
                )));
            }
        }
        let Some(action) = tables.actions.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(project_id) = input.project_id {
            action.project_id = project_id;
        }
        action.description = input.description.clone();
        action.notes = input.notes.clone();
        if let Some(completed) = input.completed {
            action.completed = completed;
        }
        Ok(Some(action.clone()))
    }

    async fn remove_action(&self, id: DbId) -> GatewayResult<bool> {
        Ok(self.tables.write().await.actions.remove(&id).is_some())
    }

    async fn health_check(&self) -> GatewayResult<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
