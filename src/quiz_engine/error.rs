//! Error types for configuration and the session pipeline.
//!
//! A wrong or unparseable answer is not an error; it simply evaluates to
//! "incorrect".

use thiserror::Error;

use crate::quiz_engine::models::{DifficultyLevel, Operation};

/// Rejected session configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("example count must be positive")]
    ZeroExampleCount,
    #[error("at least one operation must be enabled")]
    NoOperationsEnabled,
    #[error("unknown difficulty level {0} (expected 0, 1 or 2)")]
    UnknownDifficulty(u8),
    #[error("unknown difficulty level {0:?} (expected Easy, Medium or Hard)")]
    UnknownDifficultyName(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Errors emitted by the generator and the session controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no valid {operation} operands at {difficulty} after {attempts} draws")]
    Unsatisfiable {
        operation: Operation,
        difficulty: DifficultyLevel,
        attempts: u32,
    },
    #[error("{0} is not enabled in this session")]
    OperationDisabled(Operation),
    #[error("{operation} problem {index} is out of range (set has {len})")]
    IndexOutOfRange {
        operation: Operation,
        index: usize,
        len: usize,
    },
    #[error("{operation} problem {index} belongs to a solved group")]
    ProblemLocked { operation: Operation, index: usize },
    #[error("session already completed")]
    SessionFinished,
}
