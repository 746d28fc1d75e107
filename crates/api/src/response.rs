//! Public response shapes.
//!
//! Every handler maps its records through these types before responding,
//! so each entity has exactly one wire representation.

use serde::Serialize;
use taskboard_core::types::DbId;
use taskboard_db::models::action::Action;
use taskboard_db::models::project::Project;

/// `{ id, name, description, completed, actions }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectBody {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub completed: bool,
    pub actions: Vec<ActionBody>,
}

/// `{ id, project_id, description, notes, completed }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionBody {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub notes: String,
    pub completed: bool,
}

impl ProjectBody {
    /// Attach the project's actions.
    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions.into_iter().map(ActionBody::from).collect();
        self
    }
}

impl From<Project> for ProjectBody {
    /// Maps a bare row; `actions` starts empty.
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            completed: project.completed,
            actions: Vec::new(),
        }
    }
}

impl From<Action> for ActionBody {
    fn from(action: Action) -> Self {
        Self {
            id: action.id,
            project_id: action.project_id,
            description: action.description,
            notes: action.notes,
            completed: action.completed,
        }
    }
}
