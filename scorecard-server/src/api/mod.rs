//! API implementation for the Scorecard HTTP server

use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    response::Json,
    routing::{get, post},
};
use scorecard::logging::middleware::trace_requests;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

pub mod dto;
pub mod score;

use dto::{HealthResponse, RubricDto};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(score::score_transcript, health_check, get_rubric),
    components(
        schemas(
            dto::ScoreRequest,
            dto::ScoreConfigDto,
            dto::ScoreResponse,
            dto::CriterionResultDto,
            dto::ScoreMetadataDto,
            dto::RubricDto,
            dto::CriterionDto,
            dto::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "scoring", description = "Transcript scoring endpoints"),
        (name = "rubric", description = "Rubric inspection"),
        (name = "health", description = "Service health"),
    ),
    info(
        title = "Scorecard Transcript Scoring API",
        version = "1.0.0",
        description = "Scores spoken introduction transcripts against a weighted rubric using keyword, semantic and length signals, with per-criterion feedback.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;

/// Create the main router with all API endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_request_size = state.config.max_request_size;

    let api_router = Router::new()
        .route("/score", post(score::score_transcript))
        .route("/health", get(health_check))
        .route("/rubric", get(get_rubric))
        .with_state(state.clone());

    // Unprefixed routes for clients that predate /api
    let root_router = Router::new()
        .route("/score", post(score::score_transcript))
        .route("/health", get(health_check))
        .with_state(state);

    let swagger_router = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .nest("/api", api_router)
        .merge(root_router)
        .merge(swagger_router)
        // Oversized bodies fail inside the Json extractor and get the JSON error shape
        .layer(DefaultBodyLimit::max(max_request_size))
        .layer(CorsLayer::permissive())
        .layer(trace_requests())
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let rubric_loaded = !state.scorer.rubric().is_empty();

    Json(HealthResponse {
        status: if rubric_loaded { "healthy" } else { "unhealthy" }.to_string(),
        rubric_loaded,
        model_ready: true,
        criteria: state.scorer.rubric().len(),
        provider: state.scorer.provider_name(),
        version: scorecard::VERSION.to_string(),
    })
}

/// Return the loaded rubric
#[utoipa::path(
    get,
    path = "/api/rubric",
    tag = "rubric",
    responses(
        (status = 200, description = "Loaded rubric", body = RubricDto)
    )
)]
async fn get_rubric(State(state): State<Arc<AppState>>) -> Json<RubricDto> {
    Json(RubricDto::from(state.scorer.rubric()))
}
