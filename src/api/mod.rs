//! HTTP API module for the Qualifying Engine.
//!
//! This module provides the REST API endpoints for evaluating competition
//! scores against a hub's qualifying table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EvaluationRequest;
pub use response::{ApiError, ApiErrorResponse, HealthResponse, HubQualifyingScoresResponse};
pub use state::AppState;
