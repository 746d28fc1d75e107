//! Request handlers, one module per resource.
//!
//! Each handler runs its stages in order (validate, check references,
//! persist, map, respond) and returns at the first failure via `?`.

pub mod action;
pub mod project;
