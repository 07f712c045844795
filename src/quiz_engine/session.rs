//! Session controller: owns one problem set per enabled operation and runs
//! the "mutate, then recompute" pipeline after every keystroke.
//!
//! ## Pipeline
//!
//! 1. [`Session::set_answer`] stores the raw text on the problem.
//! 2. [`grouping::recompute`] refreshes the solved flags of that set.
//! 3. [`SessionTracker::update`] refreshes the category's `completed` /
//!    `has_progress` flags.
//! 4. If every enabled category is completed the session moves to
//!    [`SessionPhase::Complete`]. That transition happens once and is final.

use std::time::Duration;

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::leaderboard::GameResult;
use crate::quiz_engine::{
    config::SessionConfig,
    error::EngineError,
    evaluator::is_answered_correctly,
    generator::generate_with_rng,
    grouping,
    models::{CategoryState, CategoryStatus, Operation, Problem, ProgressPolicy},
};

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// Per-category completion flags and the overall completion signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTracker {
    enabled: [bool; 4],
    states: [CategoryState; 4],
    policy: ProgressPolicy,
}

impl SessionTracker {
    pub fn new(enabled: &[Operation], policy: ProgressPolicy) -> Self {
        let mut flags = [false; 4];
        for op in enabled {
            flags[op.index()] = true;
        }
        SessionTracker { enabled: flags, states: [CategoryState::default(); 4], policy }
    }

    /// Recompute the flags for `operation` from its problem set.
    ///
    /// `completed` always follows the answers. `has_progress` does too under
    /// [`ProgressPolicy::Recompute`]; under [`ProgressPolicy::Sticky`] it never
    /// goes back to false once set.
    pub fn update(&mut self, operation: Operation, problems: &[Problem]) -> CategoryState {
        let completed = problems.iter().all(is_answered_correctly);
        let any_correct = problems.iter().any(is_answered_correctly);

        let state = &mut self.states[operation.index()];
        state.completed = completed;
        state.has_progress = match self.policy {
            ProgressPolicy::Sticky    => state.has_progress || any_correct,
            ProgressPolicy::Recompute => any_correct,
        };
        *state
    }

    pub fn state(&self, operation: Operation) -> CategoryState {
        self.states[operation.index()]
    }

    pub fn is_enabled(&self, operation: Operation) -> bool {
        self.enabled[operation.index()]
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled.iter().filter(|&&e| e).count()
    }

    /// Completed categories among the enabled ones.
    pub fn completed_count(&self) -> usize {
        Operation::ALL
            .iter()
            .filter(|op| self.is_enabled(**op) && self.state(**op).completed)
            .count()
    }

    /// Enabled count equals completed count. With nothing enabled this is
    /// vacuously true; [`Session::start`] refuses such configurations.
    pub fn is_complete(&self) -> bool {
        self.enabled_count() == self.completed_count()
    }

    pub fn has_any_progress(&self) -> bool {
        Operation::ALL
            .iter()
            .any(|op| self.is_enabled(*op) && self.state(*op).has_progress)
    }

    pub fn reset(&mut self) {
        self.states = [CategoryState::default(); 4];
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    InProgress,
    /// Terminal: only [`Session::restart`] leaves it.
    Complete,
}

/// What a single answer change caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Updated { group_solved_changed: bool },
    /// Emitted exactly once per session, on the edit that completes it.
    Completed { leaderboard_eligible: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemSet {
    pub operation: Operation,
    pub problems: Vec<Problem>,
}

#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    rng: StdRng,
    sets: Vec<ProblemSet>,
    tracker: SessionTracker,
    phase: SessionPhase,
}

impl Session {
    /// Validate `config` and generate a fresh problem set per enabled operation.
    pub fn start(config: SessionConfig) -> Result<Self, EngineError> {
        let config = config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let tracker = SessionTracker::new(&config.enabled_operations, config.progress_policy);
        let mut session = Session {
            config,
            rng,
            sets: Vec::new(),
            tracker,
            phase: SessionPhase::InProgress,
        };
        session.regenerate()?;
        info!(
            "session started: {} x{} ({} operations)",
            session.config.difficulty,
            session.config.example_count,
            session.sets.len()
        );
        Ok(session)
    }

    /// Discard all answers and draw new problems.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        self.regenerate()?;
        self.tracker.reset();
        self.phase = SessionPhase::InProgress;
        info!("session restarted");
        Ok(())
    }

    fn regenerate(&mut self) -> Result<(), EngineError> {
        let mut sets = Vec::with_capacity(self.config.enabled_operations.len());
        for &operation in &self.config.enabled_operations {
            let problems = generate_with_rng(
                &mut self.rng,
                operation,
                self.config.difficulty,
                self.config.example_count,
            )?;
            sets.push(ProblemSet { operation, problems });
        }
        self.sets = sets;
        Ok(())
    }

    /// Keystroke handler: store `text` as the answer to problem `index` of
    /// `operation`, then recompute every derived flag.
    pub fn set_answer(
        &mut self,
        operation: Operation,
        index: usize,
        text: impl Into<String>,
    ) -> Result<SessionEvent, EngineError> {
        if self.phase == SessionPhase::Complete {
            return Err(EngineError::SessionFinished);
        }
        let set = self
            .sets
            .iter_mut()
            .find(|s| s.operation == operation)
            .ok_or(EngineError::OperationDisabled(operation))?;
        let len = set.problems.len();
        let problem = set
            .problems
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange { operation, index, len })?;
        if problem.is_solved() {
            return Err(EngineError::ProblemLocked { operation, index });
        }
        problem.user_answer = text.into();

        let changed = grouping::recompute(&mut set.problems);
        if changed > 0 {
            debug!(
                "{operation}: group {} changed ({} solved groups)",
                grouping::group_of(index),
                grouping::solved_groups(&set.problems)
            );
        }

        let before = self.tracker.state(operation);
        let after = self.tracker.update(operation, &set.problems);
        if after.completed && !before.completed {
            info!("{operation} completed");
        }

        if self.tracker.is_complete() {
            self.phase = SessionPhase::Complete;
            let leaderboard_eligible = self.leaderboard_eligible();
            info!("all enabled operations completed (leaderboard eligible: {leaderboard_eligible})");
            return Ok(SessionEvent::Completed { leaderboard_eligible });
        }
        Ok(SessionEvent::Updated { group_solved_changed: changed > 0 })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Complete
    }

    /// Enabled problem sets in canonical operation order.
    pub fn problem_sets(&self) -> &[ProblemSet] {
        &self.sets
    }

    /// `None` if `operation` is not enabled.
    pub fn problems(&self, operation: Operation) -> Option<&[Problem]> {
        self.sets
            .iter()
            .find(|s| s.operation == operation)
            .map(|s| s.problems.as_slice())
    }

    /// `None` if `operation` is not enabled.
    pub fn category_state(&self, operation: Operation) -> Option<CategoryState> {
        self.tracker
            .is_enabled(operation)
            .then(|| self.tracker.state(operation))
    }

    pub fn category_status(&self, operation: Operation) -> Option<CategoryStatus> {
        self.category_state(operation).map(CategoryState::status)
    }

    /// Whether leaving now would throw away correct answers, i.e. whether a
    /// discard confirmation should be shown.
    pub fn has_any_progress(&self) -> bool {
        self.tracker.has_any_progress()
    }

    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    /// Complete with all four operations enabled.
    pub fn leaderboard_eligible(&self) -> bool {
        self.is_complete() && self.config.all_operations_enabled()
    }

    /// Leaderboard record for a finished session; `None` unless eligible.
    pub fn game_result(&self, name: &str, elapsed: Duration) -> Option<GameResult> {
        self.leaderboard_eligible().then(|| {
            GameResult::new(name, self.config.difficulty, self.config.example_count, elapsed)
        })
    }
}
