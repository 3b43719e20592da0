//! Transcript scoring endpoint

use std::sync::Arc;

use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use scorecard::scoring::WeightOverrides;
use tracing::debug;

use crate::{
    api::dto::{ScoreRequest, ScoreResponse},
    error::{ServerError, ServerResult},
    state::AppState,
};

/// Score a transcript against the loaded rubric
#[utoipa::path(
    post,
    path = "/api/score",
    tag = "scoring",
    request_body = ScoreRequest,
    responses(
        (status = 200, description = "Transcript scored", body = ScoreResponse),
        (status = 400, description = "Blank transcript, invalid weights or malformed JSON", body = crate::error::ErrorResponse),
        (status = 422, description = "Rubric cannot be scored against", body = crate::error::ErrorResponse),
        (status = 503, description = "Embedding provider failed", body = crate::error::ErrorResponse),
        (status = 504, description = "Scoring timed out", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn score_transcript(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> ServerResult<Json<ScoreResponse>> {
    let Json(request) = payload?;
    let overrides = request.config.map(WeightOverrides::from);
    debug!(
        chars = request.transcript.len(),
        overrides = overrides.is_some(),
        "Score request received"
    );

    // The provider may block on inference or network I/O
    let scorer = state.scorer.clone();
    let task = tokio::task::spawn_blocking(move || {
        scorer.score(&request.transcript, overrides.as_ref())
    });

    let result = tokio::time::timeout(state.config.request_timeout(), task)
        .await
        .map_err(|_| ServerError::Timeout(state.config.request_timeout_secs))?
        .map_err(|e| ServerError::Internal(format!("Scoring task failed: {}", e)))??;

    Ok(Json(result.into()))
}
