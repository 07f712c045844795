//! # arithmetic_drill
//!
//! Problem generation and answer validation for a grid-based arithmetic
//! practice app (addition, subtraction, multiplication, division).
//!
//! ## How it works
//!
//! 1. Build a [`SessionConfig`] from the settings screen: difficulty, number
//!    of examples per operation, the enabled operations, and an optional RNG
//!    seed.
//! 2. [`Session::start`] generates one problem set per enabled operation,
//!    drawing operands from difficulty-specific ranges.
//! 3. On every keystroke the UI calls [`Session::set_answer`]. The session
//!    re-scores the groups of three, refreshes each category's `completed` /
//!    `has_progress` flags, and reports [`SessionEvent::Completed`] once every
//!    enabled operation is fully answered.
//! 4. If all four operations were enabled, [`Session::game_result`] yields a
//!    record for the leaderboard.
//!
//! ## Quick start
//!
//! ```rust
//! use arithmetic_drill::{DifficultyLevel, Operation, Session, SessionConfig, SessionEvent};
//!
//! let config = SessionConfig::new(DifficultyLevel::Easy, 3, &[Operation::Addition])
//!     .with_seed(42);
//! let mut session = Session::start(config).unwrap();
//!
//! let answers: Vec<String> = session
//!     .problems(Operation::Addition)
//!     .unwrap()
//!     .iter()
//!     .map(|p| p.correct_answer().to_string())
//!     .collect();
//!
//! let mut last = None;
//! for (i, answer) in answers.into_iter().enumerate() {
//!     last = Some(session.set_answer(Operation::Addition, i, answer).unwrap());
//! }
//! assert_eq!(last, Some(SessionEvent::Completed { leaderboard_eligible: false }));
//! ```

pub mod leaderboard;
pub mod quiz_engine;

pub use leaderboard::{format_elapsed, to_leaderboard_json, GameResult};
pub use quiz_engine::{
    evaluate, generate_problems, CategoryState, CategoryStatus, ConfigError, DifficultyLevel,
    EngineError, GenerationRequest, Operation, Problem, ProblemSet, ProgressPolicy, Session,
    SessionConfig, SessionEvent, SessionPhase, SessionTracker,
};
