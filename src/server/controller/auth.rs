use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{MessageDto, TokenDto},
        user::{CredentialsDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::CredentialsParams,
        service::auth::AuthService,
        state::AppState,
        util::validate::json_body,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// Stores the email with an Argon2id hash of the password.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Email and password, both required
///
/// # Returns
/// - `200 OK` - User created
/// - `400 Bad Request` - Missing field or malformed body
/// - `401 Unauthorized` - Email already registered
/// - `500 Internal Server Error` - Hashing or database error
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "User created", body = MessageDto),
        (status = 400, description = "Missing email or password", body = MessageDto),
        (status = 401, description = "User already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CredentialsParams::from_dto(json_body(payload)?)?;

    AuthService::new(&state.db, &state.jwt)
        .register(params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User created successfully")),
    ))
}

/// Log in with email and password.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token keys
/// - `payload` - Email and password, both required
///
/// # Returns
/// - `200 OK` - Bearer token for the user
/// - `400 Bad Request` - Missing field or malformed body
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Hashing, signing or database error
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Login successful", body = TokenDto),
        (status = 400, description = "Missing email or password", body = MessageDto),
        (status = 401, description = "Invalid username or password", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CredentialsParams::from_dto(json_body(payload)?)?;

    let token = AuthService::new(&state.db, &state.jwt)
        .login(params)
        .await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// Return the user identified by the bearer token.
///
/// # Returns
/// - `200 OK` - The authenticated user's ID and email
/// - `401 Unauthorized` - Missing, malformed, expired or unknown token
#[utoipa::path(
    get,
    path = "/protected",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_protected(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST variant of the protected route; behaves exactly like GET.
#[utoipa::path(
    post,
    path = "/protected",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn post_protected(
    state: State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    get_protected(state, headers).await
}
