use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{
        error::AppError, model::character::CreateCharacterParams,
        service::character::CharacterService, state::AppState, util::validate::json_body,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// Create a new character.
///
/// All seven fields are required and checked in order; the first missing one is
/// reported. Names must be unique.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Character fields
///
/// # Returns
/// - `200 OK` - Character created
/// - `400 Bad Request` - Missing field, wrong field type or malformed body
/// - `401 Unauthorized` - A character with this name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 200, description = "Character created", body = MessageDto),
        (status = 400, description = "Missing or invalid field", body = MessageDto),
        (status = 401, description = "Character already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCharacterParams::from_dto(json_body(payload)?)?;

    let character = CharacterService::new(&state.db).create(params).await?;

    tracing::info!(character_id = character.id, "Created character");

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Character created successfully")),
    ))
}

/// List every character ordered by ID.
///
/// # Returns
/// - `200 OK` - All characters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    let dtos: Vec<CharacterDto> = characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
