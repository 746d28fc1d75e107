//! Row structs for the `projects` and `actions` tables.

pub mod action;
pub mod project;
