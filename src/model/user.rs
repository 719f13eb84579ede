use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user; the password hash never leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

/// Request body for `/register` and `/login`.
///
/// Fields are optional so an absent field can be reported by name instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CredentialsDto {
    pub email: Option<String>,
    pub password: Option<String>,
}
