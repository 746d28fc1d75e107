//! Raw request payloads as they arrive on the wire.
//!
//! Every field is optional here; presence rules live in
//! [`crate::validation`], which turns these into the validated inputs the
//! storage layer accepts.

use serde::{Deserialize, Deserializer};

use crate::types::DbId;

/// Body of `POST /projects` and `PUT /projects/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Body of `POST /actions` and `PUT /actions/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionPayload {
    pub project_id: Option<DbId>,
    pub description: Option<String>,
    pub notes: Option<String>,
    /// `None` when the key is absent, `Some(None)` for an explicit `null`.
    #[serde(default, deserialize_with = "present")]
    pub completed: Option<Option<bool>>,
}

/// Marks a key as present even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Some)
}
