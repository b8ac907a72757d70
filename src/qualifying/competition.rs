//! Batch evaluation of a competition's scores.

use chrono::Utc;
use std::time::Instant;
use uuid::Uuid;

use crate::config::QualifyingScoresConfig;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Competition, EvaluationResult, EvaluationSummary,
    ScoreEvaluation, ScoreRecord,
};

use super::derive_all_around;
use super::record::evaluate_with_flag;

/// Warning code when the hub has no qualifying table.
pub const NO_QUALIFYING_CONFIG: &str = "NO_QUALIFYING_CONFIG";

/// Warning code when the meet's championship type never awards badges.
pub const NON_QUALIFYING_MEET: &str = "NON_QUALIFYING_MEET";

/// Options controlling a competition evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Derive all-around totals for gymnasts that only have event scores.
    pub derive_all_around: bool,
}

/// Evaluates every score of one competition against a hub's table.
///
/// Records are evaluated in input order; derived all-around records, when
/// requested, follow them. Warnings describe why a whole competition cannot
/// earn badges but never change the badges themselves.
pub fn evaluate_competition(
    hub_id: &str,
    competition: &Competition,
    records: &[ScoreRecord],
    config: Option<&QualifyingScoresConfig>,
    options: EvaluationOptions,
) -> EvaluationResult {
    let start_time = Instant::now();
    let championship_type = competition.championship_type;

    let mut warnings = Vec::new();
    if championship_type.qualifying_tier().is_none() {
        warnings.push(AuditWarning {
            code: NON_QUALIFYING_MEET.to_string(),
            message: format!(
                "Competition '{}' is a {} meet and awards no qualifying badges",
                competition.id, championship_type
            ),
            severity: "low".to_string(),
        });
    }
    if config.is_none() {
        warnings.push(AuditWarning {
            code: NO_QUALIFYING_CONFIG.to_string(),
            message: format!("Hub '{}' has no qualifying score table", hub_id),
            severity: "low".to_string(),
        });
    }

    let derived = if options.derive_all_around {
        derive_all_around(records)
    } else {
        Vec::new()
    };

    let mut evaluations: Vec<ScoreEvaluation> = Vec::with_capacity(records.len() + derived.len());
    let mut steps: Vec<AuditStep> = Vec::with_capacity(records.len() + derived.len());
    let mut step_number: u32 = 1;

    let tagged = records
        .iter()
        .map(|r| (r, false))
        .chain(derived.iter().map(|r| (r, true)));
    for (record, is_derived) in tagged {
        let result = evaluate_with_flag(record, config, championship_type, step_number, is_derived);
        evaluations.push(result.evaluation);
        steps.push(result.audit_step);
        step_number += 1;
    }

    let summary = EvaluationSummary::from_evaluations(&evaluations);

    EvaluationResult {
        evaluation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        hub_id: hub_id.to_string(),
        competition: competition.clone(),
        evaluations,
        summary,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}
