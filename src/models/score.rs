//! Score records as supplied by callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Gender;

/// Which kind of score a record holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    /// The sum of a gymnast's event scores at one meet.
    AllAround,
    /// A single apparatus score (vault, beam, ...).
    IndividualEvent,
}

impl ScoreType {
    /// Returns the table key for this score type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreType::AllAround => "all_around",
            ScoreType::IndividualEvent => "individual_event",
        }
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One score earned by a gymnast at a competition.
///
/// Level, gender and score may be absent; such records are still accepted and
/// simply never earn a badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Unique identifier for this record.
    pub id: String,
    /// The gymnast the score belongs to.
    pub gymnast_id: String,
    /// The gymnast's competitive level (e.g. "Level 7", "Xcel Gold").
    #[serde(default)]
    pub level: Option<String>,
    /// The gymnast's program.
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Whether this is an event score or an all-around total.
    pub score_type: ScoreType,
    /// The apparatus name for event scores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// The judged score.
    #[serde(default)]
    pub score: Option<Decimal>,
}
