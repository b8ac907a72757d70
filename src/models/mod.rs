//! Core data models for the Qualifying Engine.
//!
//! This module contains the domain models used throughout the engine.

mod competition;
mod evaluation_result;
mod gymnast;
mod score;

pub use competition::{ChampionshipType, Competition, QualifyingLevel};
pub use evaluation_result::{
    AuditStep, AuditTrace, AuditWarning, EvaluationResult, EvaluationSummary, ScoreEvaluation,
};
pub use gymnast::Gender;
pub use score::{ScoreRecord, ScoreType};
