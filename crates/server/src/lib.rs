pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Roadmap Studio API",
        version = "0.1.0",
        description = "Generates, stores and exports AI-produced project roadmaps"
    ),
    paths(
        routes::health_check,
        routes::generate_roadmap,
        routes::save_roadmap,
        routes::list_roadmaps,
        routes::download_roadmap,
        routes::chatbot,
    ),
    components(schemas(
        routes::HealthResponse,
        routes::GenerateRoadmapResponse,
        routes::SaveRoadmapResponse,
        routes::DownloadRequest,
        routes::ChatRequest,
        routes::ChatResponse,
        routes::ChatFailureResponse,
        roadmap_core::RoadmapRequest,
        roadmap_core::TaskInput,
        roadmap_core::Capacity,
        roadmap_core::SaveRoadmapRequest,
        roadmap_core::StoredRoadmap,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "roadmap", description = "Roadmap generation, persistence and export"),
        (name = "chat", description = "Chat proxy endpoints"),
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health_check))
        .route("/roadmap-generator", post(routes::generate_roadmap))
        .route("/chatbot", post(routes::chatbot))
        .route("/save-roadmap", post(routes::save_roadmap))
        .route("/download", post(routes::download_roadmap))
        .route("/roadmaps", get(routes::list_roadmaps))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
