//! HTTP request handlers for the Qualifying Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::qualifying::{evaluate_competition, EvaluationOptions};

use super::request::EvaluationRequest;
use super::response::{ApiError, ApiErrorResponse, HealthResponse, HubQualifyingScoresResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/hubs/:hub_id/qualifying-scores", get(qualifying_scores_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /evaluate endpoint.
///
/// Evaluates a competition's scores against the hub's qualifying table. An
/// unknown hub or a hub without a table yields no badges, not an error.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response();
        }
    };

    let EvaluationRequest {
        hub_id,
        competition,
        scores: records,
        derive_all_around,
    } = request;

    let config = state.config();
    if config.hub(&hub_id).is_err() {
        warn!(
            correlation_id = %correlation_id,
            hub_id = %hub_id,
            "Unknown hub, evaluating without a qualifying table"
        );
    }

    let result = evaluate_competition(
        &hub_id,
        &competition,
        &records,
        config.qualifying_scores(&hub_id),
        EvaluationOptions { derive_all_around },
    );

    info!(
        correlation_id = %correlation_id,
        hub_id = %hub_id,
        competition_id = %competition.id,
        championship_type = %competition.championship_type,
        records = result.summary.records_evaluated,
        state_badges = result.summary.state_badges,
        regional_badges = result.summary.regional_badges,
        national_badges = result.summary.national_badges,
        duration_us = result.audit_trace.duration_us,
        "Evaluation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for GET /hubs/:hub_id/qualifying-scores endpoint.
async fn qualifying_scores_handler(
    State(state): State<AppState>,
    Path(hub_id): Path<String>,
) -> impl IntoResponse {
    match state.config().hub(&hub_id) {
        Ok(hub) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(HubQualifyingScoresResponse {
                hub: hub.metadata.clone(),
                qualifying_scores: hub.qualifying_scores.clone(),
            }),
        )
            .into_response(),
        Err(err) => {
            warn!(hub_id = %hub_id, "Hub not found");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /health endpoint.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        hubs: state.config().len(),
    })
}
