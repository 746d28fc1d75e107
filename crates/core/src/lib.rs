//! Domain types shared by the storage and HTTP layers: ids, the error
//! taxonomy, incoming payloads and the validation rules applied to them.

pub mod error;
pub mod payload;
pub mod types;
pub mod validation;
