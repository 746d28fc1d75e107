//! Presence rules for project and action payloads.
//!
//! Validation is purely syntactic: a text field passes when it is present
//! and non-empty, other fields pass when present. No coercion and no length
//! limits are applied.

use crate::error::CoreError;
use crate::payload::{ActionPayload, ProjectPayload};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Validated inputs
// ---------------------------------------------------------------------------

/// A project payload that passed [`validate_project_payload`].
///
/// Used for both inserts and updates. On update, a `None` `completed` keeps
/// the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInput {
    pub name: String,
    pub description: String,
    pub completed: Option<bool>,
}

/// An action payload that passed [`validate_action_payload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAction {
    pub project_id: DbId,
    pub description: String,
    pub notes: String,
    pub completed: bool,
}

/// An action payload that passed [`validate_action_update`].
///
/// `description` and `notes` are replaced; `None` optional fields keep the
/// stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionUpdate {
    pub project_id: Option<DbId>,
    pub description: String,
    pub notes: String,
    pub completed: Option<bool>,
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Returns the value when it is present and non-empty.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Validate a project payload: `name` and `description` are required.
pub fn validate_project_payload(payload: &ProjectPayload) -> Result<ProjectInput, CoreError> {
    match (non_empty(&payload.name), non_empty(&payload.description)) {
        (Some(name), Some(description)) => Ok(ProjectInput {
            name: name.to_string(),
            description: description.to_string(),
            completed: payload.completed,
        }),
        _ => Err(CoreError::MissingField(
            "Name and description are required".to_string(),
        )),
    }
}

/// Validate an action payload for creation.
///
/// `project_id`, `description`, `notes` and `completed` must all be present.
/// An explicit `null` counts as present for `completed` and stores `false`.
/// Whether `project_id` resolves is checked separately against the store.
pub fn validate_action_payload(payload: &ActionPayload) -> Result<NewAction, CoreError> {
    match (
        payload.project_id,
        non_empty(&payload.description),
        non_empty(&payload.notes),
        payload.completed,
    ) {
        (Some(project_id), Some(description), Some(notes), Some(completed)) => Ok(NewAction {
            project_id,
            description: description.to_string(),
            notes: notes.to_string(),
            completed: completed.unwrap_or(false),
        }),
        _ => Err(CoreError::MissingField(
            "Project ID, description, notes, and completed are required".to_string(),
        )),
    }
}

/// Validate an action payload for update.
///
/// Only `description` and `notes` are required; the owning project and the
/// completion flag may be omitted.
pub fn validate_action_update(payload: &ActionPayload) -> Result<ActionUpdate, CoreError> {
    match (non_empty(&payload.description), non_empty(&payload.notes)) {
        (Some(description), Some(notes)) => Ok(ActionUpdate {
            project_id: payload.project_id,
            description: description.to_string(),
            notes: notes.to_string(),
            completed: payload.completed.flatten(),
        }),
        _ => Err(CoreError::MissingField(
            "Description and notes are required".to_string(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn project(name: Option<&str>, description: Option<&str>) -> ProjectPayload {
        ProjectPayload {
            name: name.map(String::from),
            description: description.map(String::from),
            completed: None,
        }
    }

    fn action() -> ActionPayload {
        ActionPayload {
            project_id: Some(1),
            description: Some("Action A".to_string()),
            notes: Some("Notes A".to_string()),
            completed: Some(Some(false)),
        }
    }

    // -- projects --

    #[test]
    fn project_with_name_and_description_passes() {
        let input = validate_project_payload(&project(Some("Project A"), Some("Description A")))
            .unwrap();
        assert_eq!(input.name, "Project A");
        assert_eq!(input.description, "Description A");
        assert_eq!(input.completed, None);
    }

    #[test]
    fn project_keeps_completed_flag() {
        let mut payload = project(Some("Project B"), Some("Description B"));
        payload.completed = Some(true);
        let input = validate_project_payload(&payload).unwrap();
        assert_eq!(input.completed, Some(true));
    }

    #[test]
    fn project_missing_description_fails() {
        assert_matches!(
            validate_project_payload(&project(Some("Project D"), None)),
            Err(CoreError::MissingField(_))
        );
    }

    #[test]
    fn project_missing_name_fails() {
        assert_matches!(
            validate_project_payload(&project(None, Some("Description"))),
            Err(CoreError::MissingField(_))
        );
    }

    #[test]
    fn project_empty_name_fails() {
        assert_matches!(
            validate_project_payload(&project(Some(""), Some("Description D"))),
            Err(CoreError::MissingField(_))
        );
    }

    // -- action create --

    #[test]
    fn complete_action_passes() {
        let input = validate_action_payload(&action()).unwrap();
        assert_eq!(
            input,
            NewAction {
                project_id: 1,
                description: "Action A".to_string(),
                notes: "Notes A".to_string(),
                completed: false,
            }
        );
    }

    #[test]
    fn action_missing_notes_fails() {
        let payload = ActionPayload {
            notes: None,
            completed: None,
            ..action()
        };
        assert_matches!(
            validate_action_payload(&payload),
            Err(CoreError::MissingField(_))
        );
    }

    #[test]
    fn action_missing_project_id_fails() {
        let payload = ActionPayload {
            project_id: None,
            ..action()
        };
        assert_matches!(
            validate_action_payload(&payload),
            Err(CoreError::MissingField(_))
        );
    }

    #[test]
    fn action_create_requires_completed() {
        let payload = ActionPayload {
            completed: None,
            ..action()
        };
        assert_matches!(
            validate_action_payload(&payload),
            Err(CoreError::MissingField(_))
        );
    }

    #[test]
    fn action_create_accepts_null_completed() {
        let payload = ActionPayload {
            completed: Some(None),
            ..action()
        };
        let input = validate_action_payload(&payload).unwrap();
        assert!(!input.completed);
    }

    #[test]
    fn action_empty_description_fails() {
        let payload = ActionPayload {
            description: Some(String::new()),
            ..action()
        };
        assert_matches!(
            validate_action_payload(&payload),
            Err(CoreError::MissingField(_))
        );
    }

    // -- action update --

    #[test]
    fn action_update_without_project_or_completed_passes() {
        let payload = ActionPayload {
            project_id: None,
            completed: None,
            ..action()
        };
        let update = validate_action_update(&payload).unwrap();
        assert_eq!(update.project_id, None);
        assert_eq!(update.completed, None);
        assert_eq!(update.notes, "Notes A");
    }

    #[test]
    fn action_update_missing_notes_fails() {
        let payload = ActionPayload {
            project_id: None,
            description: Some("Incomplete Update".to_string()),
            notes: None,
            completed: None,
        };
        assert_matches!(
            validate_action_update(&payload),
            Err(CoreError::MissingField(_))
        );
    }
}
