//! User domain models and parameters.

use crate::{
    model::user::{CredentialsDto, UserDto},
    server::{error::AppError, util::validate::required},
};

/// Registered user as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Auto-assigned user ID, also the token subject.
    pub id: i32,
    /// Unique login email.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
}

impl User {
    /// Converts the user to its public DTO, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
        }
    }
}

/// Validated email and plain-text password from `/register` or `/login`.
#[derive(Debug, Clone)]
pub struct CredentialsParams {
    pub email: String,
    pub password: String,
}

impl CredentialsParams {
    /// Checks `email` then `password` for presence.
    ///
    /// # Returns
    /// - `Ok(CredentialsParams)` - Both fields present
    /// - `Err(AppError::Validation)` - `"No email was provided"` or `"No password was provided"`
    pub fn from_dto(dto: CredentialsDto) -> Result<Self, AppError> {
        Ok(Self {
            email: required(dto.email, "email")?,
            password: required(dto.password, "password")?,
        })
    }
}

/// Parameters for inserting a user once the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
}
