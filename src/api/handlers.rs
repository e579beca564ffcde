//! HTTP request handlers

use crate::api::models::{AcronymResponse, DefinitionRequest, DefinitionResponse, HealthResponse};
use crate::engine::{self, Mode};
use crate::error::AppError;
use axum::{response::Html, Json};
use tracing::info;

/// Serve the main page. The markup is baked in at compile time; nothing here
/// depends on per-request randomness.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Generate a new random acronym
#[utoipa::path(
    get,
    path = "/generate_acronym",
    responses(
        (status = 200, description = "A fresh random acronym", body = AcronymResponse)
    ),
    tag = "Acronym"
)]
pub async fn generate_acronym() -> Result<Json<AcronymResponse>, AppError> {
    let acronym = engine::generate(None);
    info!(%acronym, "Generated acronym");

    Ok(Json(AcronymResponse { acronym }))
}

/// Get a definition for a letter based on mode
#[utoipa::path(
    post,
    path = "/get_definition",
    request_body = DefinitionRequest,
    responses(
        (status = 200, description = "Definition for the letter", body = DefinitionResponse)
    ),
    tag = "Definitions"
)]
pub async fn get_definition(
    Json(request): Json<DefinitionRequest>,
) -> Result<Json<DefinitionResponse>, AppError> {
    let mode = Mode::parse(&request.mode);
    let definition = engine::resolve(&request.letter, mode);

    info!(letter = %request.letter, mode = mode.as_str(), "Resolved definition");

    Ok(Json(DefinitionResponse { definition }))
}

/// Health check endpoint. Returns a fixed body, independent of the random
/// source and the word banks.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
