//! Request body validation helpers.
//!
//! Request DTOs keep every field optional; the `*Params` types built from them list
//! their required fields explicitly, in order, through [`required`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    Json,
};

use crate::server::error::AppError;

/// Unwraps a required field or reports it as missing.
///
/// # Arguments
/// - `value` - Field as deserialized; `None` when absent or `null`
/// - `label` - Human readable field name used in the message
///
/// # Returns
/// - `Ok(T)` - Field present
/// - `Err(AppError::Validation)` - `"No {label} was provided"`
pub fn required<T>(value: Option<T>, label: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("No {} was provided", label)))
}

/// Turns an axum JSON extraction result into the request body or a 400.
///
/// Malformed JSON, a wrong content type or a field of the wrong type all surface as
/// `AppError::Validation` with axum's description of the problem.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(AppError::Validation(rejection.body_text())),
    }
}

/// Turns an axum path extraction result into the parameter or a 400.
///
/// Keeps a non-numeric ID such as `/favorites/planets/abc` on the `{"msg": ...}` body shape.
pub fn path_param<T>(param: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    match param {
        Ok(Path(value)) => Ok(value),
        Err(rejection) => Err(AppError::Validation(rejection.body_text())),
    }
}
