//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::payload::ProjectPayload;
use taskboard_core::types::DbId;
use taskboard_core::validation::validate_project_payload;

use crate::error::AppResult;
use crate::existence::{self, project_not_found};
use crate::extract::{PathParam, Payload};
use crate::response::{ActionBody, ProjectBody};
use crate::state::AppState;

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Payload(payload): Payload<ProjectPayload>,
) -> AppResult<(StatusCode, Json<ProjectBody>)> {
    let input = validate_project_payload(&payload)?;
    let project = state.gateway.insert_project(&input).await?;
    tracing::info!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(ProjectBody::from(project))))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectBody>>> {
    let projects = state.gateway.list_projects().await?;
    Ok(Json(projects.into_iter().map(ProjectBody::from).collect()))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<ProjectBody>> {
    let project = existence::find_project(state.gateway.as_ref(), id).await?;
    let actions = state.gateway.project_actions(id).await?;
    Ok(Json(ProjectBody::from(project).with_actions(actions)))
}

/// PUT /api/projects/{id}
///
/// A missing project answers 404 before the body is validated.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    Payload(payload): Payload<ProjectPayload>,
) -> AppResult<Json<ProjectBody>> {
    existence::find_project(state.gateway.as_ref(), id).await?;
    let input = validate_project_payload(&payload)?;
    let project = state
        .gateway
        .update_project(id, &input)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    let actions = state.gateway.project_actions(id).await?;
    Ok(Json(ProjectBody::from(project).with_actions(actions)))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    if state.gateway.remove_project(id).await? {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(project_not_found(id).into())
    }
}

/// GET /api/projects/{id}/actions
///
/// No existence check: an unknown project lists as empty.
pub async fn list_actions(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Vec<ActionBody>>> {
    let actions = state.gateway.project_actions(id).await?;
    Ok(Json(actions.into_iter().map(ActionBody::from).collect()))
}
