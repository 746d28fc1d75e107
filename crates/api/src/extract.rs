//! Extractors whose rejections render through [`AppError`], so malformed
//! bodies and path ids get the same JSON error shape as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Rejections become `400 BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Payload<T>(pub T);

/// A single typed path parameter. Rejections become `400 BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
