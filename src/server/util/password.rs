//! Argon2id password hashing.
//!
//! Hashing is CPU bound, so both operations run on the blocking thread pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a password into a PHC string with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted Argon2id hash suitable for storage
/// - `Err(AppError::InternalErr(_))` - Hashing failed or the blocking task was lost
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || -> Result<String, InternalError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| InternalError::PasswordHash(e.to_string()))
    })
    .await
    .map_err(InternalError::from)??;

    Ok(hash)
}

/// Checks a password against a stored PHC hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalErr(_))` - Stored hash is malformed or the blocking task was lost
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || -> Result<bool, InternalError> {
        let parsed = PasswordHash::new(&password_hash)
            .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(InternalError::PasswordHash(e.to_string())),
        }
    })
    .await
    .map_err(InternalError::from)??;

    Ok(matches)
}
