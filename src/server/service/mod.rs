//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Uniqueness checks, credential verification and token issuing
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;


use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

/// Maps a unique constraint violation to `AppError::Conflict`.
///
/// Services check for duplicates before inserting; this covers two requests that
/// pass the check concurrently and race to the insert.
pub(crate) fn conflict_on_duplicate(err: DbErr, msg: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(msg.to_string()),
        _ => err.into(),
    }
}
