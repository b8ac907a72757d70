//! Qualifying-score determination.
//!
//! Maps a score and its context to the qualifying badge it earns. The rule is
//! a ladder: clearing the threshold at meet tier *N* earns eligibility for
//! tier *N+1*. National and unsanctioned meets never award a badge.
//!
//! Evaluation is total. Any absent input or missing table entry yields no
//! badge rather than an error, and nothing here logs.

use rust_decimal::Decimal;

use crate::config::QualifyingScoresConfig;
use crate::models::{ChampionshipType, Gender, QualifyingLevel, ScoreType};

/// The branch taken when evaluating one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualifyingDecision {
    /// The meet's championship type never awards a badge.
    NonQualifyingMeet(ChampionshipType),
    /// A required input was absent; holds the input's name.
    MissingInput(&'static str),
    /// The table has no entry for the gender.
    NoGenderEntry,
    /// The table has no entry for the level.
    NoLevelEntry,
    /// The table has no entry for the score type.
    NoScoreTypeEntry,
    /// The tier tested for this meet has no threshold configured.
    NoThreshold(QualifyingLevel),
    /// The score fell short of the threshold.
    BelowThreshold {
        /// The tier that was tested.
        tier: QualifyingLevel,
        /// The configured minimum.
        threshold: Decimal,
    },
    /// The score met or exceeded the threshold.
    Qualified {
        /// The tier awarded.
        tier: QualifyingLevel,
        /// The configured minimum.
        threshold: Decimal,
    },
}

impl QualifyingDecision {
    /// Returns the badges this decision awards.
    pub fn qualifying_levels(&self) -> Vec<QualifyingLevel> {
        match self {
            QualifyingDecision::Qualified { tier, .. } => vec![*tier],
            _ => Vec::new(),
        }
    }

    /// Short machine-readable name of the branch.
    pub fn outcome(&self) -> &'static str {
        match self {
            QualifyingDecision::NonQualifyingMeet(_) => "non_qualifying_meet",
            QualifyingDecision::MissingInput(_) => "missing_input",
            QualifyingDecision::NoGenderEntry => "no_gender_entry",
            QualifyingDecision::NoLevelEntry => "no_level_entry",
            QualifyingDecision::NoScoreTypeEntry => "no_score_type_entry",
            QualifyingDecision::NoThreshold(_) => "no_threshold",
            QualifyingDecision::BelowThreshold { .. } => "below_threshold",
            QualifyingDecision::Qualified { .. } => "qualified",
        }
    }
}

/// Decides which branch of the qualifying rule applies.
///
/// Checks run in a fixed order: championship type first, then absent
/// inputs, then each layer of the table, then the single tier selected by
/// the championship type.
pub fn decide_qualifying(
    score: Option<Decimal>,
    level: Option<&str>,
    gender: Option<Gender>,
    score_type: ScoreType,
    config: Option<&QualifyingScoresConfig>,
    championship_type: ChampionshipType,
) -> QualifyingDecision {
    let Some(tier) = championship_type.qualifying_tier() else {
        return QualifyingDecision::NonQualifyingMeet(championship_type);
    };

    let Some(score) = score else {
        return QualifyingDecision::MissingInput("score");
    };
    let Some(level) = level else {
        return QualifyingDecision::MissingInput("level");
    };
    let Some(gender) = gender else {
        return QualifyingDecision::MissingInput("gender");
    };
    let Some(config) = config else {
        return QualifyingDecision::MissingInput("config");
    };

    let Some(levels) = config.gender(gender) else {
        return QualifyingDecision::NoGenderEntry;
    };
    let Some(score_types) = levels.get(level) else {
        return QualifyingDecision::NoLevelEntry;
    };
    let Some(thresholds) = score_types.get(&score_type) else {
        return QualifyingDecision::NoScoreTypeEntry;
    };

    match thresholds.threshold_for(tier) {
        None => QualifyingDecision::NoThreshold(tier),
        Some(threshold) if score >= threshold => QualifyingDecision::Qualified { tier, threshold },
        Some(threshold) => QualifyingDecision::BelowThreshold { tier, threshold },
    }
}

/// Returns the qualifying badges a score earns.
///
/// The result holds zero or one entries:
/// - `National` and `Unsanctioned` meets: always empty
/// - Absent score, level, gender or config: empty
/// - No table entry for the gender, level or score type: empty
/// - Otherwise the tier selected by `championship_type` (regular → state,
///   state → regional, regional → national) is awarded when
///   `score >= threshold`
///
/// # Examples
///
/// ```
/// use qualifying_engine::config::{QualifyingScoresConfig, TierThresholds};
/// use qualifying_engine::models::{ChampionshipType, Gender, QualifyingLevel, ScoreType};
/// use qualifying_engine::qualifying::get_qualifying_levels;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut config = QualifyingScoresConfig::default();
/// config.insert(
///     Gender::Female,
///     "Level 7",
///     ScoreType::IndividualEvent,
///     TierThresholds { state: Some(Decimal::from_str("9.0").unwrap()), ..Default::default() },
/// );
///
/// let badges = get_qualifying_levels(
///     Some(Decimal::from_str("9.500").unwrap()),
///     Some("Level 7"),
///     Some(Gender::Female),
///     ScoreType::IndividualEvent,
///     Some(&config),
///     ChampionshipType::Regular,
/// );
/// assert_eq!(badges, vec![QualifyingLevel::State]);
/// ```
pub fn get_qualifying_levels(
    score: Option<Decimal>,
    level: Option<&str>,
    gender: Option<Gender>,
    score_type: ScoreType,
    config: Option<&QualifyingScoresConfig>,
    championship_type: ChampionshipType,
) -> Vec<QualifyingLevel> {
    decide_qualifying(score, level, gender, score_type, config, championship_type)
        .qualifying_levels()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TierThresholds;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Female Level 7 with a state-only event table and a full AA table.
    fn create_test_config() -> QualifyingScoresConfig {
        let mut config = QualifyingScoresConfig::default();
        config.insert(
            Gender::Female,
            "Level 7",
            ScoreType::IndividualEvent,
            TierThresholds {
                state: Some(dec("9.0")),
                ..Default::default()
            },
        );
        config.insert(
            Gender::Female,
            "Level 7",
            ScoreType::AllAround,
            TierThresholds {
                state: Some(dec("34.00")),
                regional: Some(dec("35.50")),
                national: Some(dec("36.75")),
            },
        );
        config
    }

    fn evaluate(
        score: Option<&str>,
        score_type: ScoreType,
        championship_type: ChampionshipType,
        config: &QualifyingScoresConfig,
    ) -> Vec<QualifyingLevel> {
        get_qualifying_levels(
            score.map(dec),
            Some("Level 7"),
            Some(Gender::Female),
            score_type,
            Some(config),
            championship_type,
        )
    }

    // ==========================================================================
    // Scenario 1: event score above state threshold at a regular meet
    // ==========================================================================
    #[test]
    fn test_regular_meet_event_score_earns_state() {
        let config = create_test_config();
        let result = evaluate(
            Some("9.500"),
            ScoreType::IndividualEvent,
            ChampionshipType::Regular,
            &config,
        );
        assert_eq!(result, vec![QualifyingLevel::State]);
    }

    // ==========================================================================
    // Scenario 2: just below the threshold
    // ==========================================================================
    #[test]
    fn test_score_below_state_threshold_earns_nothing() {
        let config = create_test_config();
        let result = evaluate(
            Some("8.999"),
            ScoreType::IndividualEvent,
            ChampionshipType::Regular,
            &config,
        );
        assert!(result.is_empty());
    }

    // ==========================================================================
    // Scenario 3: state meet with no regional threshold configured
    // ==========================================================================
    #[test]
    fn test_state_meet_without_regional_threshold_earns_nothing() {
        let config = create_test_config();
        let result = evaluate(
            Some("9.500"),
            ScoreType::IndividualEvent,
            ChampionshipType::State,
            &config,
        );
        assert!(result.is_empty());
    }

    // ==========================================================================
    // Scenarios 4 and 5: national and unsanctioned meets
    // ==========================================================================
    #[test]
    fn test_national_meet_never_awards() {
        let config = create_test_config();
        let result = evaluate(
            Some("40.0"),
            ScoreType::AllAround,
            ChampionshipType::National,
            &config,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_unsanctioned_meet_never_awards() {
        let config = create_test_config();
        let result = evaluate(
            Some("40.0"),
            ScoreType::AllAround,
            ChampionshipType::Unsanctioned,
            &config,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_non_qualifying_meet_checked_before_absent_inputs() {
        let decision = decide_qualifying(
            None,
            None,
            None,
            ScoreType::AllAround,
            None,
            ChampionshipType::National,
        );
        assert_eq!(
            decision,
            QualifyingDecision::NonQualifyingMeet(ChampionshipType::National)
        );
    }

    // ==========================================================================
    // Scenario 6: absent score
    // ==========================================================================
    #[test]
    fn test_absent_score_earns_nothing() {
        let config = create_test_config();
        let result = evaluate(None, ScoreType::AllAround, ChampionshipType::Regular, &config);
        assert!(result.is_empty());
    }

    // ==========================================================================
    // Scenario 7: unknown level
    // ==========================================================================
    #[test]
    fn test_unknown_level_earns_nothing() {
        let config = create_test_config();
        let result = get_qualifying_levels(
            Some(dec("9.9")),
            Some("Level 99"),
            Some(Gender::Female),
            ScoreType::IndividualEvent,
            Some(&config),
            ChampionshipType::Regular,
        );
        assert!(result.is_empty());
    }

    // ==========================================================================
    // Additional tests
    // ==========================================================================
    #[test]
    fn test_threshold_is_inclusive() {
        let config = create_test_config();
        let result = evaluate(
            Some("9.000"),
            ScoreType::IndividualEvent,
            ChampionshipType::Regular,
            &config,
        );
        assert_eq!(result, vec![QualifyingLevel::State]);
    }

    #[test]
    fn test_state_meet_all_around_earns_regional() {
        let config = create_test_config();
        let result = evaluate(
            Some("35.50"),
            ScoreType::AllAround,
            ChampionshipType::State,
            &config,
        );
        assert_eq!(result, vec![QualifyingLevel::Regional]);
    }

    #[test]
    fn test_regional_meet_all_around_earns_national() {
        let config = create_test_config();
        let result = evaluate(
            Some("37.1"),
            ScoreType::AllAround,
            ChampionshipType::Regional,
            &config,
        );
        assert_eq!(result, vec![QualifyingLevel::National]);
    }

    #[test]
    fn test_only_selected_tier_is_tested() {
        // 37.1 clears every AA threshold but a regular meet only tests state.
        let config = create_test_config();
        let result = evaluate(
            Some("37.1"),
            ScoreType::AllAround,
            ChampionshipType::Regular,
            &config,
        );
        assert_eq!(result, vec![QualifyingLevel::State]);
    }

    #[test]
    fn test_regional_meet_below_national_threshold() {
        let config = create_test_config();
        let decision = decide_qualifying(
            Some(dec("36.70")),
            Some("Level 7"),
            Some(Gender::Female),
            ScoreType::AllAround,
            Some(&config),
            ChampionshipType::Regional,
        );
        assert_eq!(
            decision,
            QualifyingDecision::BelowThreshold {
                tier: QualifyingLevel::National,
                threshold: dec("36.75"),
            }
        );
        assert!(decision.qualifying_levels().is_empty());
    }

    #[test]
    fn test_absent_level_gender_and_config() {
        let config = create_test_config();
        let score = Some(dec("9.5"));
        let st = ScoreType::IndividualEvent;
        let regular = ChampionshipType::Regular;

        assert_eq!(
            decide_qualifying(score, None, Some(Gender::Female), st, Some(&config), regular),
            QualifyingDecision::MissingInput("level")
        );
        assert_eq!(
            decide_qualifying(score, Some("Level 7"), None, st, Some(&config), regular),
            QualifyingDecision::MissingInput("gender")
        );
        assert_eq!(
            decide_qualifying(score, Some("Level 7"), Some(Gender::Female), st, None, regular),
            QualifyingDecision::MissingInput("config")
        );
    }

    #[test]
    fn test_missing_gender_entry() {
        let config = create_test_config();
        let decision = decide_qualifying(
            Some(dec("9.5")),
            Some("Level 7"),
            Some(Gender::Male),
            ScoreType::IndividualEvent,
            Some(&config),
            ChampionshipType::Regular,
        );
        assert_eq!(decision, QualifyingDecision::NoGenderEntry);
    }

    #[test]
    fn test_missing_score_type_entry() {
        let mut config = QualifyingScoresConfig::default();
        config.insert(
            Gender::Female,
            "Xcel Gold",
            ScoreType::AllAround,
            TierThresholds {
                state: Some(dec("35.0")),
                ..Default::default()
            },
        );
        let decision = decide_qualifying(
            Some(dec("9.5")),
            Some("Xcel Gold"),
            Some(Gender::Female),
            ScoreType::IndividualEvent,
            Some(&config),
            ChampionshipType::Regular,
        );
        assert_eq!(decision, QualifyingDecision::NoScoreTypeEntry);
    }

    #[test]
    fn test_empty_config_earns_nothing() {
        let config = QualifyingScoresConfig::default();
        let result = evaluate(
            Some("40.0"),
            ScoreType::AllAround,
            ChampionshipType::Regular,
            &config,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_config_not_mutated() {
        let config = create_test_config();
        let before = config.clone();
        let _ = evaluate(
            Some("9.5"),
            ScoreType::IndividualEvent,
            ChampionshipType::Regular,
            &config,
        );
        assert_eq!(config, before);
    }

    #[test]
    fn test_outcome_names() {
        assert_eq!(
            QualifyingDecision::NoThreshold(QualifyingLevel::Regional).outcome(),
            "no_threshold"
        );
        assert_eq!(
            QualifyingDecision::Qualified {
                tier: QualifyingLevel::State,
                threshold: dec("9.0"),
            }
            .outcome(),
            "qualified"
        );
    }
}
