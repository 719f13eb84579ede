use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, favorite::FavoritesDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::favorite::FavoriteService,
        state::AppState, util::validate::path_param,
    },
};

/// Tag for grouping favorites endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

const INCLUDED: &str = "Favorite successfully included";
const DELETED: &str = "Favorite successfully deleted";

/// Get the authenticated user's favorites.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `200 OK` - Favorite characters and planets, each in the order they were added
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/favorites",
    tag = FAVORITE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User's favorites", body = FavoritesDto),
        (status = 401, description = "Missing or invalid token", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;

    let favorites = FavoriteService::new(&state.db).get_for_user(user.id).await?;

    Ok((StatusCode::OK, Json(favorites.into_dto())))
}

/// Add a character to the authenticated user's favorites.
///
/// # Returns
/// - `200 OK` - Favorite added
/// - `400 Bad Request` - Character ID is not a number
/// - `401 Unauthorized` - Missing or invalid token, or already a favorite
/// - `404 Not Found` - Character does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    security(("bearer" = [])),
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Invalid character ID", body = MessageDto),
        (status = 401, description = "Missing or invalid token, or favorite already exists", body = MessageDto),
        (status = 404, description = "Character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    headers: HeaderMap,
    character_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;
    let character_id = path_param(character_id)?;

    FavoriteService::new(&state.db)
        .add_character(user.id, character_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(INCLUDED))))
}

/// Remove a character from the authenticated user's favorites.
///
/// # Returns
/// - `200 OK` - Favorite removed
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Character is not one of the user's favorites
#[utoipa::path(
    delete,
    path = "/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    security(("bearer" = [])),
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Invalid character ID", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = MessageDto),
        (status = 404, description = "Favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    headers: HeaderMap,
    character_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;
    let character_id = path_param(character_id)?;

    FavoriteService::new(&state.db)
        .remove_character(user.id, character_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(DELETED))))
}

/// Add a planet to the authenticated user's favorites.
#[utoipa::path(
    post,
    path = "/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    security(("bearer" = [])),
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Invalid planet ID", body = MessageDto),
        (status = 401, description = "Missing or invalid token, or favorite already exists", body = MessageDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    headers: HeaderMap,
    planet_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;
    let planet_id = path_param(planet_id)?;

    FavoriteService::new(&state.db)
        .add_planet(user.id, planet_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(INCLUDED))))
}

/// Remove a planet from the authenticated user's favorites.
#[utoipa::path(
    delete,
    path = "/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    security(("bearer" = [])),
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Invalid planet ID", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = MessageDto),
        (status = 404, description = "Favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    headers: HeaderMap,
    planet_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers)
        .await?;
    let planet_id = path_param(planet_id)?;

    FavoriteService::new(&state.db)
        .remove_planet(user.id, planet_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(DELETED))))
}
