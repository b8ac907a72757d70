//! Configuration types for qualifying-score evaluation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from each hub's YAML files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Gender, QualifyingLevel, ScoreType};

/// Metadata about a hub (a gym or team).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubMetadata {
    /// Stable identifier used in requests.
    pub id: String,
    /// The human-readable name of the hub.
    pub name: String,
    /// The governing body whose standards the table follows.
    #[serde(default)]
    pub governing_body: Option<String>,
}

/// Minimum scores for each qualifying tier.
///
/// A tier left out means no standard is defined at that tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Minimum score for a state badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Decimal>,
    /// Minimum score for a regional badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional: Option<Decimal>,
    /// Minimum score for a national badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national: Option<Decimal>,
}

impl TierThresholds {
    /// Returns the threshold configured for the given tier.
    pub fn threshold_for(&self, level: QualifyingLevel) -> Option<Decimal> {
        match level {
            QualifyingLevel::State => self.state,
            QualifyingLevel::Regional => self.regional,
            QualifyingLevel::National => self.national,
        }
    }

    /// Iterates over the configured tiers and their thresholds.
    pub fn configured(&self) -> impl Iterator<Item = (QualifyingLevel, Decimal)> {
        [
            (QualifyingLevel::State, self.state),
            (QualifyingLevel::Regional, self.regional),
            (QualifyingLevel::National, self.national),
        ]
        .into_iter()
        .filter_map(|(level, threshold)| threshold.map(|t| (level, t)))
    }
}

/// Thresholds for one level, keyed by score type.
pub type LevelThresholds = HashMap<ScoreType, TierThresholds>;

/// A hub's qualifying-score table: gender → level → score type → tiers.
///
/// Every lookup returns an `Option`; a missing key at any layer means no
/// standard is configured.
///
/// # Example
///
/// ```
/// use qualifying_engine::config::{QualifyingScoresConfig, TierThresholds};
/// use qualifying_engine::models::{Gender, ScoreType};
/// use rust_decimal::Decimal;
///
/// let mut config = QualifyingScoresConfig::default();
/// config.insert(
///     Gender::Female,
///     "Level 7",
///     ScoreType::AllAround,
///     TierThresholds { state: Some(Decimal::new(3400, 2)), ..Default::default() },
/// );
///
/// assert!(config.thresholds(Gender::Female, "Level 7", ScoreType::AllAround).is_some());
/// assert!(config.thresholds(Gender::Female, "Level 8", ScoreType::AllAround).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifyingScoresConfig {
    genders: HashMap<Gender, HashMap<String, LevelThresholds>>,
}

impl QualifyingScoresConfig {
    /// Returns the level table for a gender.
    pub fn gender(&self, gender: Gender) -> Option<&HashMap<String, LevelThresholds>> {
        self.genders.get(&gender)
    }

    /// Returns the score-type table for a gender and level.
    pub fn level(&self, gender: Gender, level: &str) -> Option<&LevelThresholds> {
        self.gender(gender)?.get(level)
    }

    /// Returns the tier thresholds for a gender, level and score type.
    pub fn thresholds(
        &self,
        gender: Gender,
        level: &str,
        score_type: ScoreType,
    ) -> Option<&TierThresholds> {
        self.level(gender, level)?.get(&score_type)
    }

    /// Sets the thresholds for a gender, level and score type.
    pub fn insert(
        &mut self,
        gender: Gender,
        level: impl Into<String>,
        score_type: ScoreType,
        thresholds: TierThresholds,
    ) {
        self.genders
            .entry(gender)
            .or_default()
            .entry(level.into())
            .or_default()
            .insert(score_type, thresholds);
    }

    /// Iterates over every configured entry.
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (Gender, &str, ScoreType, &TierThresholds)> {
        self.genders.iter().flat_map(|(gender, levels)| {
            levels.iter().flat_map(move |(level, score_types)| {
                score_types.iter().map(move |(score_type, thresholds)| {
                    (*gender, level.as_str(), *score_type, thresholds)
                })
            })
        })
    }

    /// Returns true when no thresholds are configured at all.
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

/// A hub's complete configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    /// Hub metadata.
    pub metadata: HubMetadata,
    /// The qualifying table, if the hub has configured one.
    pub qualifying_scores: Option<QualifyingScoresConfig>,
}

impl HubConfig {
    /// Returns the hub identifier.
    pub fn id(&self) -> &str {
        &self.metadata.id
    }
}
