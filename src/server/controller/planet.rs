use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        error::AppError, model::planet::CreatePlanetParams, service::planet::PlanetService,
        state::AppState, util::validate::json_body,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// Create a new planet.
///
/// All seven fields are required and checked in order; the first missing one is
/// reported by its field name. Names must be unique.
///
/// # Returns
/// - `200 OK` - Planet created
/// - `400 Bad Request` - Missing field, wrong field type or malformed body
/// - `401 Unauthorized` - A planet with this name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 200, description = "Planet created", body = MessageDto),
        (status = 400, description = "Missing or invalid field", body = MessageDto),
        (status = 401, description = "Planet already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePlanetParams::from_dto(json_body(payload)?)?;

    let planet = PlanetService::new(&state.db).create(params).await?;

    tracing::info!(planet_id = planet.id, "Created planet");

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Planet created successfully")),
    ))
}

/// List every planet ordered by ID.
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    let dtos: Vec<PlanetDto> = planets.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
