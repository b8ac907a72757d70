//! Audited evaluation of a single score record.

use crate::config::QualifyingScoresConfig;
use crate::models::{AuditStep, ChampionshipType, ScoreEvaluation, ScoreRecord};

use super::{QualifyingDecision, decide_qualifying};

/// The result of evaluating one score record, including the audit step.
#[derive(Debug, Clone)]
pub struct RecordEvaluationResult {
    /// The badges earned by the record.
    pub evaluation: ScoreEvaluation,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Evaluates one score record against a hub's qualifying table.
///
/// The badges are exactly those returned by
/// [`get_qualifying_levels`](super::get_qualifying_levels) for the record's
/// fields; the audit step explains which branch of the rule applied.
///
/// # Examples
///
/// ```
/// use qualifying_engine::models::{ChampionshipType, Gender, ScoreRecord, ScoreType};
/// use qualifying_engine::qualifying::evaluate_score_record;
/// use rust_decimal::Decimal;
///
/// let record = ScoreRecord {
///     id: "score_001".to_string(),
///     gymnast_id: "gym_001".to_string(),
///     level: Some("Level 7".to_string()),
///     gender: Some(Gender::Female),
///     score_type: ScoreType::AllAround,
///     event: None,
///     score: Some(Decimal::new(3550, 2)),
/// };
///
/// // No table configured: no badge, never an error.
/// let result = evaluate_score_record(&record, None, ChampionshipType::Regular, 1);
/// assert!(result.evaluation.qualifying_levels.is_empty());
/// assert_eq!(result.audit_step.output["outcome"], "missing_input");
/// ```
pub fn evaluate_score_record(
    record: &ScoreRecord,
    config: Option<&QualifyingScoresConfig>,
    championship_type: ChampionshipType,
    step_number: u32,
) -> RecordEvaluationResult {
    evaluate_with_flag(record, config, championship_type, step_number, false)
}

/// Evaluates a record, marking whether it was derived from event scores.
pub(crate) fn evaluate_with_flag(
    record: &ScoreRecord,
    config: Option<&QualifyingScoresConfig>,
    championship_type: ChampionshipType,
    step_number: u32,
    derived: bool,
) -> RecordEvaluationResult {
    let decision = decide_qualifying(
        record.score,
        record.level.as_deref(),
        record.gender,
        record.score_type,
        config,
        championship_type,
    );
    let qualifying_levels = decision.qualifying_levels();

    let threshold = match decision {
        QualifyingDecision::BelowThreshold { threshold, .. }
        | QualifyingDecision::Qualified { threshold, .. } => {
            Some(threshold.normalize().to_string())
        }
        _ => None,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "qualifying_score".to_string(),
        rule_name: "Qualifying Score".to_string(),
        input: serde_json::json!({
            "record_id": record.id,
            "gymnast_id": record.gymnast_id,
            "score": record.score.map(|s| s.normalize().to_string()),
            "level": record.level,
            "gender": record.gender.map(|g| g.as_str()),
            "score_type": record.score_type.as_str(),
            "championship_type": championship_type.as_str(),
            "derived": derived
        }),
        output: serde_json::json!({
            "outcome": decision.outcome(),
            "threshold": threshold,
            "qualifying_levels": qualifying_levels
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>()
        }),
        reasoning: explain(&decision, record),
    };

    RecordEvaluationResult {
        evaluation: ScoreEvaluation {
            record_id: record.id.clone(),
            gymnast_id: record.gymnast_id.clone(),
            score_type: record.score_type,
            event: record.event.clone(),
            score: record.score,
            qualifying_levels,
            derived,
        },
        audit_step,
    }
}

fn explain(decision: &QualifyingDecision, record: &ScoreRecord) -> String {
    let level = record.level.as_deref().unwrap_or("-");
    let gender = record.gender.map(|g| g.as_str()).unwrap_or("-");
    let score_type = record.score_type;

    match decision {
        QualifyingDecision::NonQualifyingMeet(championship_type) => format!(
            "No badge: {} meets do not award qualifying badges",
            championship_type
        ),
        QualifyingDecision::MissingInput(input) => {
            format!("No badge: {} is not available", input)
        }
        QualifyingDecision::NoGenderEntry => {
            format!("No badge: no qualifying table for {}", gender)
        }
        QualifyingDecision::NoLevelEntry => {
            format!("No badge: no qualifying table for {} {}", gender, level)
        }
        QualifyingDecision::NoScoreTypeEntry => format!(
            "No badge: no {} thresholds for {} {}",
            score_type, gender, level
        ),
        QualifyingDecision::NoThreshold(tier) => format!(
            "No badge: no {} threshold for {} {} {}",
            tier, gender, level, score_type
        ),
        QualifyingDecision::BelowThreshold { tier, threshold } => format!(
            "No badge: {} is below the {} threshold of {}",
            display_score(record),
            tier,
            threshold.normalize()
        ),
        QualifyingDecision::Qualified { tier, threshold } => format!(
            "{} badge: {} meets the {} threshold of {}",
            capitalise(tier.as_str()),
            display_score(record),
            tier,
            threshold.normalize()
        ),
    }
}

fn display_score(record: &ScoreRecord) -> String {
    record
        .score
        .map(|s| s.normalize().to_string())
        .unwrap_or_default()
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
