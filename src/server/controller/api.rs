use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};

use crate::model::api::{MessageDto, SitemapDto};

/// Tag for grouping index endpoints in OpenAPI documentation
pub static API_TAG: &str = "api";

/// GET / - List every documented endpoint.
///
/// The list is built once from the OpenAPI document when the router is constructed
/// and shared with this handler as an extension.
///
/// # Returns
/// - `200 OK` - Sorted list of API paths
#[utoipa::path(
    get,
    path = "/",
    tag = API_TAG,
    responses(
        (status = 200, description = "Sorted list of documented API paths", body = SitemapDto)
    ),
)]
pub async fn sitemap(Extension(sitemap): Extension<Arc<SitemapDto>>) -> impl IntoResponse {
    (StatusCode::OK, Json(sitemap.as_ref().clone()))
}

/// Fallback for paths with no route.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(MessageDto::new("Not found")))
}

/// Fallback for a known path requested with a method it does not serve.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageDto::new("Method not allowed")),
    )
}
