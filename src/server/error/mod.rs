//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. Every error body
//! has the shape `{"msg": "..."}`.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. `AuthError` handles its own response
/// mapping, while the remaining variants use the status codes documented on each.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()`, always 401 Unauthorized.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected internal failure (hashing, token signing, task join).
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body is missing a required field or cannot be parsed.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Resource with the same unique key already exists.
    ///
    /// Results in 401 Unauthorized with the provided message; existing clients
    /// depend on this status for duplicates.
    #[error("{0}")]
    Conflict(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 401 Unauthorized - For `Conflict`, and `AuthErr` via `AuthError::into_response()`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types (DbErr, InternalErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(MessageDto { msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::UNAUTHORIZED, Json(MessageDto { msg })).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageDto { msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto {
                msg: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
