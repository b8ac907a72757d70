//! Request types for the Qualifying Engine API.
//!
//! This module defines the JSON request structure for the `/evaluate` endpoint.
//! Competitions and scores deserialize straight into the domain models.

use serde::{Deserialize, Serialize};

use crate::models::{Competition, ScoreRecord};

/// Request body for the `/evaluate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The hub whose qualifying table applies.
    pub hub_id: String,
    /// The competition the scores were earned at.
    pub competition: Competition,
    /// The scores to evaluate.
    pub scores: Vec<ScoreRecord>,
    /// Derive all-around totals from event scores where none were given.
    #[serde(default)]
    pub derive_all_around: bool,
}
