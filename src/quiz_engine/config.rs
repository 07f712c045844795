//! Session configuration handed over by the settings layer.
//!
//! The settings screen owns persistence; the engine only sees a snapshot taken
//! when a session starts.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::ConfigError,
    grouping::GROUP_SIZE,
    models::{DifficultyLevel, Operation, ProgressPolicy, RawDifficulty},
};

/// Bounds of the example-count slider in the settings screen.
pub const MIN_EXAMPLE_COUNT: usize = 15;
pub const MAX_EXAMPLE_COUNT: usize = 90;
pub const EXAMPLE_COUNT_STEP: usize = 15;
pub const DEFAULT_EXAMPLE_COUNT: usize = 45;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub difficulty: DifficultyLevel,
    /// Problems per enabled operation.
    pub example_count: usize,
    pub enabled_operations: Vec<Operation>,
    pub progress_policy: ProgressPolicy,
    /// `Some` makes every generated set reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            difficulty: DifficultyLevel::Medium,
            example_count: DEFAULT_EXAMPLE_COUNT,
            enabled_operations: Operation::ALL.to_vec(),
            progress_policy: ProgressPolicy::default(),
            rng_seed: None,
        }
    }
}

impl SessionConfig {
    pub fn new(difficulty: DifficultyLevel, example_count: usize, enabled: &[Operation]) -> Self {
        SessionConfig {
            difficulty,
            example_count,
            enabled_operations: enabled.to_vec(),
            ..SessionConfig::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_progress_policy(mut self, policy: ProgressPolicy) -> Self {
        self.progress_policy = policy;
        self
    }

    /// Parse a JSON settings snapshot and validate it.
    ///
    /// Missing fields take their defaults. `difficulty` may be the raw
    /// settings value (`0|1|2`) or the level name; an out-of-range value is
    /// reported as [`ConfigError::UnknownDifficulty`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let snapshot: SettingsSnapshot = serde_json::from_str(json)?;
        snapshot.into_config()?.validate()
    }

    /// Check the configuration and normalise the operation list into
    /// canonical order without duplicates.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.example_count == 0 {
            return Err(ConfigError::ZeroExampleCount);
        }
        if self.enabled_operations.is_empty() {
            return Err(ConfigError::NoOperationsEnabled);
        }
        self.enabled_operations = Operation::ALL
            .into_iter()
            .filter(|op| self.enabled_operations.contains(op))
            .collect();
        if self.example_count % GROUP_SIZE != 0 {
            warn!(
                "example count {} is not a multiple of {GROUP_SIZE}; the last group can never be solved",
                self.example_count
            );
        }
        Ok(self)
    }

    pub fn is_enabled(&self, operation: Operation) -> bool {
        self.enabled_operations.contains(&operation)
    }

    /// True when every operation is enabled, the precondition for saving a
    /// leaderboard result.
    pub fn all_operations_enabled(&self) -> bool {
        Operation::ALL.iter().all(|op| self.is_enabled(*op))
    }
}

/// Settings JSON before the difficulty is checked, so that a bad level
/// surfaces as its own error instead of a generic parse failure.
#[derive(Debug, Deserialize)]
struct SettingsSnapshot {
    difficulty: Option<RawDifficulty>,
    example_count: Option<usize>,
    enabled_operations: Option<Vec<Operation>>,
    progress_policy: Option<ProgressPolicy>,
    rng_seed: Option<u64>,
}

impl SettingsSnapshot {
    fn into_config(self) -> Result<SessionConfig, ConfigError> {
        let defaults = SessionConfig::default();
        Ok(SessionConfig {
            difficulty: match self.difficulty {
                Some(raw) => DifficultyLevel::try_from(raw)?,
                None      => defaults.difficulty,
            },
            example_count: self.example_count.unwrap_or(defaults.example_count),
            enabled_operations: self.enabled_operations.unwrap_or(defaults.enabled_operations),
            progress_policy: self.progress_policy.unwrap_or(defaults.progress_policy),
            rng_seed: self.rng_seed,
        })
    }
}

/// Example-count choices offered by the settings slider.
pub fn example_count_choices() -> impl Iterator<Item = usize> {
    (MIN_EXAMPLE_COUNT..=MAX_EXAMPLE_COUNT).step_by(EXAMPLE_COUNT_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_settings_screen() {
        let c = SessionConfig::default();
        assert_eq!(c.difficulty, DifficultyLevel::Medium);
        assert_eq!(c.example_count, 45);
        assert!(c.all_operations_enabled());
        assert_eq!(c.progress_policy, ProgressPolicy::Sticky);
    }

    #[test]
    fn slider_choices_are_multiples_of_group_size() {
        let choices: Vec<usize> = example_count_choices().collect();
        assert_eq!(choices, [15, 30, 45, 60, 75, 90]);
        assert!(choices.iter().all(|c| c % GROUP_SIZE == 0));
    }

    #[test]
    fn zero_count_is_rejected() {
        let c = SessionConfig::new(DifficultyLevel::Easy, 0, &[Operation::Addition]);
        assert!(matches!(c.validate(), Err(ConfigError::ZeroExampleCount)));
    }

    #[test]
    fn empty_operation_list_is_rejected() {
        let c = SessionConfig::new(DifficultyLevel::Easy, 3, &[]);
        assert!(matches!(c.validate(), Err(ConfigError::NoOperationsEnabled)));
    }

    #[test]
    fn operations_are_deduplicated_and_ordered() {
        let c = SessionConfig::new(
            DifficultyLevel::Easy,
            3,
            &[Operation::Division, Operation::Addition, Operation::Division],
        )
        .validate()
        .unwrap();
        assert_eq!(c.enabled_operations, [Operation::Addition, Operation::Division]);
    }

    #[test]
    fn json_snapshot_parses_with_defaults() {
        let c = SessionConfig::from_json(
            r#"{ "difficulty": "Hard", "enabled_operations": ["Subtraction"], "rng_seed": 9 }"#,
        )
        .unwrap();
        assert_eq!(c.difficulty, DifficultyLevel::Hard);
        assert_eq!(c.example_count, DEFAULT_EXAMPLE_COUNT);
        assert_eq!(c.enabled_operations, [Operation::Subtraction]);
        assert_eq!(c.rng_seed, Some(9));
    }

    #[test]
    fn json_accepts_raw_settings_difficulty() {
        let c = SessionConfig::from_json(
            r#"{ "difficulty": 2, "enabled_operations": ["Addition"] }"#,
        )
        .unwrap();
        assert_eq!(c.difficulty, DifficultyLevel::Hard);
        let c = SessionConfig::from_json(r#"{ "difficulty": 0 }"#).unwrap();
        assert_eq!(c.difficulty, DifficultyLevel::Easy);
    }

    #[test]
    fn json_rejects_unknown_difficulty() {
        assert!(matches!(
            SessionConfig::from_json(r#"{ "difficulty": 3 }"#),
            Err(ConfigError::UnknownDifficulty(3))
        ));
        assert!(matches!(
            SessionConfig::from_json(r#"{ "difficulty": "Expert" }"#),
            Err(ConfigError::UnknownDifficultyName(ref name)) if name == "Expert"
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let c = SessionConfig::new(DifficultyLevel::Easy, 30, &[Operation::Division]).with_seed(5);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(SessionConfig::from_json(&json).unwrap(), c);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            SessionConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
