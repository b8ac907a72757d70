//! Competition (meet) model and championship tiers.
//!
//! A meet's [`ChampionshipType`] decides which single qualifying tier a score
//! earned there can be tested against. The ladder is: a regular meet can earn
//! a state badge, a state championship a regional badge, and a regional
//! championship a national badge.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A qualifying badge a score can earn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualifyingLevel {
    /// Eligible for the state championship.
    State,
    /// Eligible for the regional championship.
    Regional,
    /// Eligible for the national championship.
    National,
}

impl QualifyingLevel {
    /// Returns the snake_case name used in tables and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            QualifyingLevel::State => "state",
            QualifyingLevel::Regional => "regional",
            QualifyingLevel::National => "national",
        }
    }
}

impl fmt::Display for QualifyingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tier classification of a meet.
///
/// `Regular` stands for an ordinary or unclassified meet; on the wire it is
/// written as `null` inside a [`Competition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChampionshipType {
    /// A regular, unclassified meet.
    #[default]
    Regular,
    /// A state championship.
    State,
    /// A regional championship.
    Regional,
    /// A national championship.
    National,
    /// A meet whose results do not count toward qualification.
    Unsanctioned,
}

impl ChampionshipType {
    /// Returns the one qualifying tier a score from this meet may be tested
    /// against, or `None` when the meet never awards a badge.
    ///
    /// # Examples
    ///
    /// ```
    /// use qualifying_engine::models::{ChampionshipType, QualifyingLevel};
    ///
    /// assert_eq!(ChampionshipType::Regular.qualifying_tier(), Some(QualifyingLevel::State));
    /// assert_eq!(ChampionshipType::State.qualifying_tier(), Some(QualifyingLevel::Regional));
    /// assert_eq!(ChampionshipType::National.qualifying_tier(), None);
    /// ```
    pub fn qualifying_tier(&self) -> Option<QualifyingLevel> {
        match self {
            ChampionshipType::Regular => Some(QualifyingLevel::State),
            ChampionshipType::State => Some(QualifyingLevel::Regional),
            ChampionshipType::Regional => Some(QualifyingLevel::National),
            ChampionshipType::National | ChampionshipType::Unsanctioned => None,
        }
    }

    /// Returns the snake_case name of this championship type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChampionshipType::Regular => "regular",
            ChampionshipType::State => "state",
            ChampionshipType::Regional => "regional",
            ChampionshipType::National => "national",
            ChampionshipType::Unsanctioned => "unsanctioned",
        }
    }
}

impl fmt::Display for ChampionshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A competition whose scores are being evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    /// Unique identifier for the competition.
    pub id: String,
    /// Display name of the meet.
    #[serde(default)]
    pub name: String,
    /// The meet's championship tier; `null` or missing means a regular meet.
    #[serde(default, with = "nullable_championship_type")]
    pub championship_type: ChampionshipType,
}

/// Maps `ChampionshipType::Regular` to and from JSON `null`.
mod nullable_championship_type {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &ChampionshipType,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            ChampionshipType::Regular => serializer.serialize_none(),
            other => serializer.serialize_some(other),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<ChampionshipType, D::Error> {
        Ok(Option::<ChampionshipType>::deserialize(deserializer)?.unwrap_or_default())
    }
}
