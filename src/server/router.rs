//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/docs`.

use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::SitemapDto,
    server::{controller, state::AppState},
};

/// Registers the `bearer` security scheme referenced by protected routes.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected
/// into a unified OpenAPI document. The paths of that document also back the `GET /`
/// sitemap, so every registered route is listed there.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap of documented paths
/// - `POST /register`, `POST /login` - Account creation and token login
/// - `GET|POST /protected` - Current user from bearer token
/// - `GET /user` - Fixed greeting
/// - `GET|POST /characters`, `GET|POST /planets` - Catalog
/// - `GET /favorites`, `POST|DELETE /favorites/{characters,planets}/{id}` - Per-user favorites
///
/// Swagger UI is served at `/docs` and the OpenAPI document at `/docs/openapi.json`.
/// Unknown paths and unsupported methods answer with a `{"msg": ...}` body like every
/// other error. Requests are traced and CORS is permissive.
///
/// # Arguments
/// - `state` - Shared application state
///
/// # Returns
/// A `Router` with state applied, ready for `axum::serve`.
pub fn router(state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Holocron", description = "Star Wars characters, planets and favorites API"),
        modifiers(&BearerSecurity),
        tags(
            (name = controller::api::API_TAG, description = "Index routes"),
            (name = controller::auth::AUTH_TAG, description = "Registration, login and token check"),
            (name = controller::user::USER_TAG, description = "User routes"),
            (name = controller::character::CHARACTER_TAG, description = "Character catalog"),
            (name = controller::planet::PLANET_TAG, description = "Planet catalog"),
            (name = controller::favorite::FAVORITE_TAG, description = "Per-user favorites"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::api::sitemap))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(
            controller::auth::get_protected,
            controller::auth::post_protected
        ))
        .routes(routes!(controller::user::hello))
        .routes(routes!(
            controller::character::get_characters,
            controller::character::create_character
        ))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(controller::favorite::get_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .split_for_parts();

    let mut endpoints: Vec<String> = api.paths.paths.keys().cloned().collect();
    endpoints.sort();
    let sitemap = SitemapDto { endpoints };

    routes
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
        .method_not_allowed_fallback(controller::api::method_not_allowed)
        .fallback(controller::api::not_found)
        .layer(Extension(Arc::new(sitemap)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
