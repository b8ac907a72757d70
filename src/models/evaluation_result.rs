//! Evaluation result models for the Qualifying Engine.
//!
//! This module contains the [`EvaluationResult`] type and its associated
//! structures that capture the outputs of evaluating a competition's scores:
//! per-record badges, a summary, and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Competition, QualifyingLevel, ScoreType};

/// The badges earned by a single score record.
///
/// # Example
///
/// ```
/// use qualifying_engine::models::{QualifyingLevel, ScoreEvaluation, ScoreType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let evaluation = ScoreEvaluation {
///     record_id: "score_001".to_string(),
///     gymnast_id: "gym_001".to_string(),
///     score_type: ScoreType::IndividualEvent,
///     event: Some("beam".to_string()),
///     score: Some(Decimal::from_str("9.500").unwrap()),
///     qualifying_levels: vec![QualifyingLevel::State],
///     derived: false,
/// };
/// assert!(evaluation.qualifies());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvaluation {
    /// The ID of the evaluated score record.
    pub record_id: String,
    /// The gymnast the score belongs to.
    pub gymnast_id: String,
    /// Whether the score is an event score or an all-around total.
    pub score_type: ScoreType,
    /// The apparatus for event scores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// The evaluated score, if one was recorded.
    pub score: Option<Decimal>,
    /// The qualifying badges earned (zero or one entries).
    pub qualifying_levels: Vec<QualifyingLevel>,
    /// True when the record was derived by summing event scores.
    #[serde(default)]
    pub derived: bool,
}

impl ScoreEvaluation {
    /// Returns true if the score earned at least one badge.
    pub fn qualifies(&self) -> bool {
        !self.qualifying_levels.is_empty()
    }
}

/// Badge counts for an evaluated competition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    /// Number of score records evaluated, derived ones included.
    pub records_evaluated: usize,
    /// Number of state badges awarded.
    pub state_badges: usize,
    /// Number of regional badges awarded.
    pub regional_badges: usize,
    /// Number of national badges awarded.
    pub national_badges: usize,
    /// Gymnasts with at least one badge, sorted and de-duplicated.
    pub qualified_gymnasts: Vec<String>,
}

impl EvaluationSummary {
    /// Builds a summary from a set of evaluations.
    pub fn from_evaluations(evaluations: &[ScoreEvaluation]) -> Self {
        let mut summary = EvaluationSummary {
            records_evaluated: evaluations.len(),
            ..Default::default()
        };

        for evaluation in evaluations {
            for level in &evaluation.qualifying_levels {
                match level {
                    QualifyingLevel::State => summary.state_badges += 1,
                    QualifyingLevel::Regional => summary.regional_badges += 1,
                    QualifyingLevel::National => summary.national_badges += 1,
                }
            }
            if evaluation.qualifies() {
                summary
                    .qualified_gymnasts
                    .push(evaluation.gymnast_id.clone());
            }
        }

        summary.qualified_gymnasts.sort();
        summary.qualified_gymnasts.dedup();
        summary
    }
}

/// A single step in the audit trace recording an evaluation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during evaluation.
///
/// Warnings are informational and never change the badges awarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of evaluation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during evaluation.
    pub warnings: Vec<AuditWarning>,
    /// The total evaluation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of evaluating one competition's scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Unique identifier for this evaluation.
    pub evaluation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// The hub whose qualifying table was used.
    pub hub_id: String,
    /// The competition the scores were earned at.
    pub competition: Competition,
    /// One evaluation per score record, in input order, derived records last.
    pub evaluations: Vec<ScoreEvaluation>,
    /// Aggregated badge counts.
    pub summary: EvaluationSummary,
    /// Complete audit trace of evaluation decisions.
    pub audit_trace: AuditTrace,
}
