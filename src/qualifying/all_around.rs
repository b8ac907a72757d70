//! All-around derivation.
//!
//! The all-around is the sum of a gymnast's individual event scores at one
//! meet. Callers that only record event scores can ask for the totals to be
//! derived so that all-around thresholds are evaluated too.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

use crate::models::{Gender, ScoreRecord, ScoreType};

/// Sums event scores into an all-around total.
///
/// Returns `None` for an empty slice, or when the total does not fit in a
/// `Decimal`.
///
/// # Examples
///
/// ```
/// use qualifying_engine::qualifying::calculate_all_around;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let scores = ["9.1", "8.85", "9.0", "9.2"].map(|s| Decimal::from_str(s).unwrap());
/// assert_eq!(calculate_all_around(&scores), Some(Decimal::from_str("36.15").unwrap()));
/// assert_eq!(calculate_all_around(&[]), None);
/// ```
pub fn calculate_all_around(event_scores: &[Decimal]) -> Option<Decimal> {
    let (first, rest) = event_scores.split_first()?;
    rest.iter()
        .try_fold(*first, |total, score| total.checked_add(*score))
}

#[derive(Default)]
struct EventTotals {
    level: Option<String>,
    gender: Option<Gender>,
    scores: Vec<Decimal>,
}

/// Builds all-around records for gymnasts that only have event scores.
///
/// One record is produced per gymnast with at least one scored event and no
/// explicit all-around record. Gymnasts whose total overflows get none. Event records without a score are skipped;
/// level and gender come from the first event record that carries them.
/// Derived records are ordered by gymnast id and get the id
/// `"<gymnast_id>:all_around"`.
pub fn derive_all_around(records: &[ScoreRecord]) -> Vec<ScoreRecord> {
    let explicit: HashSet<&str> = records
        .iter()
        .filter(|r| r.score_type == ScoreType::AllAround)
        .map(|r| r.gymnast_id.as_str())
        .collect();

    let mut by_gymnast: BTreeMap<&str, EventTotals> = BTreeMap::new();
    for record in records
        .iter()
        .filter(|r| r.score_type == ScoreType::IndividualEvent)
        .filter(|r| !explicit.contains(r.gymnast_id.as_str()))
    {
        let Some(score) = record.score else {
            continue;
        };
        let totals = by_gymnast.entry(record.gymnast_id.as_str()).or_default();
        if totals.level.is_none() {
            totals.level = record.level.clone();
        }
        if totals.gender.is_none() {
            totals.gender = record.gender;
        }
        totals.scores.push(score);
    }

    by_gymnast
        .into_iter()
        .filter_map(|(gymnast_id, totals)| {
            let score = calculate_all_around(&totals.scores)?;
            Some(ScoreRecord {
                id: format!("{}:all_around", gymnast_id),
                gymnast_id: gymnast_id.to_string(),
                level: totals.level,
                gender: totals.gender,
                score_type: ScoreType::AllAround,
                event: None,
                score: Some(score),
            })
        })
        .collect()
}
