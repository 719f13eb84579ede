use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password or parse a stored hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing a freshly issued bearer token failed.
    #[error("Failed to issue token: {0}")]
    TokenIssue(#[source] jsonwebtoken::errors::Error),

    /// A blocking task (password hashing) panicked or was cancelled.
    #[error(transparent)]
    BlockingTask(#[from] tokio::task::JoinError),
}
