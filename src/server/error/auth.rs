use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user matches the email, or the password does not verify.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Request carried no `Authorization` header.
    #[error("Missing Authorization Header")]
    MissingToken,

    /// `Authorization` header present but not a usable bearer token.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token signature is valid but its `exp` claim has passed.
    #[error("Token has expired")]
    ExpiredToken,

    /// Token names a user ID that no longer exists.
    #[error("User ID {0} from token not found in database")]
    UserNotInDatabase(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant is a 401 Unauthorized. The detailed reason is logged at debug
/// level; token failures return a generic message to avoid leaking why a token
/// was rejected beyond expiry.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let msg = match &self {
            Self::InvalidCredentials | Self::MissingToken | Self::ExpiredToken => self.to_string(),
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => "Invalid token".to_string(),
        };

        (StatusCode::UNAUTHORIZED, Json(MessageDto { msg })).into_response()
    }
}
