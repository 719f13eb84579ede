//! Registration and login.
//!
//! Passwords are stored as Argon2id hashes and checked on login; a successful login
//! returns a signed bearer token whose subject is the user's ID.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParams, CredentialsParams, User},
    service::conflict_on_duplicate,
    util::{
        jwt::JwtKeys,
        password::{hash_password, verify_password},
    },
};

/// Service for account registration and credential login.
pub struct AuthService<'a> {
    /// Database connection for user lookups and inserts.
    pub db: &'a DatabaseConnection,
    /// Keys used to sign issued tokens.
    pub jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `jwt` - Reference to the token signing keys
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `params` - Validated email and plain-text password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - `"User already exists"` for a taken email
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: CredentialsParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let password_hash = hash_password(params.password).await?;

        let user = user_repo
            .create(CreateUserParams {
                email: params.email,
                password_hash,
            })
            .await
            .map_err(|e| conflict_on_duplicate(e, "User already exists"))?;

        tracing::info!(user_id = user.id, "Registered new user");

        Ok(user)
    }

    /// Checks credentials and issues a bearer token.
    ///
    /// An unknown email and a wrong password produce the same error so callers
    /// cannot probe which emails are registered.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token for the user
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::InternalErr)` - Hash verification or token signing failed
    pub async fn login(&self, params: CredentialsParams) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(params.password, user.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self
            .jwt
            .issue(user.id)
            .map_err(InternalError::TokenIssue)?;

        Ok(token)
    }
}
