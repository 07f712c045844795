use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::quiz_engine::models::DifficultyLevel;

/// Name recorded when the player leaves the nickname empty.
pub const ANONYMOUS: &str = "Anonymous";

/// One leaderboard entry, emitted when a session with all four operations
/// enabled is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub name: String,
    pub difficulty: DifficultyLevel,
    pub example_count: usize,
    pub elapsed_secs: f64,
}

impl GameResult {
    pub fn new(name: &str, difficulty: DifficultyLevel, example_count: usize, elapsed: Duration) -> Self {
        let trimmed = name.trim();
        GameResult {
            name: if trimmed.is_empty() { ANONYMOUS.to_string() } else { trimmed.to_string() },
            difficulty,
            example_count,
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::try_from_secs_f64(self.elapsed_secs).unwrap_or_default()
    }
}

/// Format elapsed time as `MM:SS.cc` (centiseconds truncated).
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let centis = elapsed.subsec_millis() / 10;
    format!("{:02}:{:02}.{:02}", total / 60, total % 60, centis)
}

/// Map a [`GameResult`] to the JSON record the leaderboard sink stores.
///
/// Difficulty is written as the settings' raw integer so existing records
/// stay comparable.
pub fn to_leaderboard_json(result: &GameResult) -> Value {
    json!({
        "name": result.name,
        "difficulty": result.difficulty.as_raw(),
        "difficulty_label": result.difficulty.to_string(),
        "example_count": result.example_count,
        "time": result.elapsed_secs,
        "time_display": format_elapsed(result.elapsed()),
    })
}
