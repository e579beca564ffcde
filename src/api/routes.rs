//! HTTP route definitions

use crate::api::handlers;
use crate::api::models::*;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BOBODDY Brainstorm Engine API",
        version = "0.1.0",
        description = "Random acronym generation with corporate-jargon and Creed-quote definitions.",
        license(name = "MIT"),
    ),
    paths(
        handlers::generate_acronym,
        handlers::get_definition,
        handlers::health_check,
    ),
    components(schemas(
        AcronymResponse,
        DefinitionRequest,
        DefinitionResponse,
        HealthResponse,
    )),
    tags(
        (name = "Acronym", description = "Acronym generation"),
        (name = "Definitions", description = "Per-letter definition lookup"),
        (name = "Health", description = "Health and monitoring endpoints"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub async fn create_router(state: Arc<crate::AppState>) -> Router {
    let static_dir = {
        let config = state.settings.read().await;
        config.server.static_dir.clone()
    };

    Router::new()
        // Main page
        .route("/", get(handlers::index))
        // JSON endpoints
        .route("/generate_acronym", get(handlers::generate_acronym))
        .route("/get_definition", post(handlers::get_definition))
        // Health check endpoint
        .route("/health", get(handlers::health_check))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Static assets for the page
        .nest_service("/static", ServeDir::new(static_dir))
        // Add shared state
        .with_state(state)
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
