pub mod action;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                       list, create
/// /projects/{id}                  get, update, delete
/// /projects/{id}/actions          list actions of a project
///
/// /actions                        list, create
/// /actions/{id}                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/actions", action::router())
}
