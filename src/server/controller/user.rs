use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// GET /user - Fixed greeting kept for existing clients.
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Greeting message", body = MessageDto)
    ),
)]
pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto::new("Hello, this is your GET /user response ")),
    )
}
