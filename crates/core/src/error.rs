use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required payload field is absent or empty.
    #[error("Missing required fields: {0}")]
    MissingField(String),

    /// The entity addressed by the request path does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A foreign id carried in the payload does not resolve.
    #[error("Referenced entity not found: {entity} with id {id}")]
    ReferenceNotFound { entity: &'static str, id: DbId },
}
