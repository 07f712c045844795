//! Core quiz engine: problem generation, answer checking, and session state.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: operations, difficulty, problems, category flags |
//! | `config`     | Session configuration snapshot from the settings layer |
//! | `error`      | Configuration and engine errors |
//! | `helpers`    | Bounded rejection sampling shared by the operand generators |
//! | `operations` | Operand generators, one per operation |
//! | `generator`  | `generate_problems()`, dispatches to the operation generators |
//! | `evaluator`  | Whitespace-tolerant answer checking |
//! | `grouping`   | All-or-nothing scoring of groups of three |
//! | `session`    | Per-category tracking and the keystroke pipeline |

pub mod config;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod grouping;
pub mod helpers;
pub mod models;
pub mod operations;
pub mod session;

pub use config::SessionConfig;
pub use error::{ConfigError, EngineError};
pub use evaluator::evaluate;
pub use generator::generate_problems;
pub use models::{
    CategoryState, CategoryStatus, DifficultyLevel, GenerationRequest, Operation, Problem,
    ProgressPolicy,
};
pub use session::{ProblemSet, Session, SessionEvent, SessionPhase, SessionTracker};
