use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taskboard_core::error::CoreError;
use taskboard_db::GatewayError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`GatewayError`] for store
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`]
/// to produce consistent `{ "message", "code" }` JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taskboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The persistence gateway failed.
    #[error("Storage failure: {0}")]
    Storage(#[from] GatewayError),

    /// A request that could not be parsed (malformed JSON, bad path id).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::MissingField(msg) => {
                    (StatusCode::BAD_REQUEST, "MISSING_FIELD", msg.clone())
                }
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::ReferenceNotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "REFERENCE_NOT_FOUND",
                    format!("{entity} with id {id} does not exist"),
                ),
            },

            // --- Store failures ---
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage failure");
                internal_error()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// The sanitized 500 triple. Details go to the log, never to the client.
fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
