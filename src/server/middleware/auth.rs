use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::errors::ErrorKind;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::jwt::JwtKeys,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Resolves the bearer token on a request to a stored user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Requires a valid `Authorization: Bearer <token>` header.
    ///
    /// # Returns
    /// - `Ok(User)` - Token verified and its subject exists
    /// - `Err(AuthError::MissingToken)` - No `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Not a bearer token, bad signature or malformed claims
    /// - `Err(AuthError::ExpiredToken)` - Token past its `exp`
    /// - `Err(AuthError::UserNotInDatabase)` - Subject no longer exists
    pub async fn require(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let Some(header) = headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthError::InvalidToken("expected a bearer token".to_string()))?;

        let claims = self.jwt.verify(token).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken(e.to_string()),
        })?;

        let user_id: i32 = claims.sub.parse().map_err(|_| {
            AuthError::InvalidToken(format!("subject {:?} is not a user ID", claims.sub))
        })?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}
