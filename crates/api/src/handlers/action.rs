//! Handlers for the `/actions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::payload::ActionPayload;
use taskboard_core::types::DbId;
use taskboard_core::validation::{validate_action_payload, validate_action_update};

use crate::error::AppResult;
use crate::existence::{self, action_not_found};
use crate::extract::{PathParam, Payload};
use crate::response::ActionBody;
use crate::state::AppState;

/// POST /api/actions
pub async fn create(
    State(state): State<AppState>,
    Payload(payload): Payload<ActionPayload>,
) -> AppResult<(StatusCode, Json<ActionBody>)> {
    let input = validate_action_payload(&payload)?;
    existence::project_exists(state.gateway.as_ref(), input.project_id).await?;
    let action = state.gateway.insert_action(&input).await?;
    tracing::info!(action_id = action.id, project_id = action.project_id, "Action created");
    Ok((StatusCode::CREATED, Json(ActionBody::from(action))))
}

/// GET /api/actions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ActionBody>>> {
    let actions = state.gateway.list_actions().await?;
    Ok(Json(actions.into_iter().map(ActionBody::from).collect()))
}

/// GET /api/actions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<ActionBody>> {
    let action = existence::find_action(state.gateway.as_ref(), id).await?;
    Ok(Json(ActionBody::from(action)))
}

/// PUT /api/actions/{id}
///
/// A missing action answers 404 before the body is validated. A supplied
/// `project_id` must resolve.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    Payload(payload): Payload<ActionPayload>,
) -> AppResult<Json<ActionBody>> {
    existence::find_action(state.gateway.as_ref(), id).await?;
    let input = validate_action_update(&payload)?;
    if let Some(project_id) = input.project_id {
        existence::project_exists(state.gateway.as_ref(), project_id).await?;
    }
    let action = state
        .gateway
        .update_action(id, &input)
        .await?
        .ok_or_else(|| action_not_found(id))?;
    Ok(Json(ActionBody::from(action)))
}

/// DELETE /api/actions/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    if state.gateway.remove_action(id).await? {
        tracing::info!(action_id = id, "Action deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(action_not_found(id).into())
    }
}
