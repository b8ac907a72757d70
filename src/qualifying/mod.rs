//! Qualifying-score evaluation for the Qualifying Engine.
//!
//! This module contains the qualifying rule itself ([`get_qualifying_levels`]),
//! an audited per-record evaluation, all-around derivation from event scores,
//! and batch evaluation of a whole competition.

mod all_around;
mod competition;
mod evaluator;
mod record;

pub use all_around::{calculate_all_around, derive_all_around};
pub use competition::{
    EvaluationOptions, NO_QUALIFYING_CONFIG, NON_QUALIFYING_MEET, evaluate_competition,
};
pub use evaluator::{QualifyingDecision, decide_qualifying, get_qualifying_levels};
pub use record::{RecordEvaluationResult, evaluate_score_record};
