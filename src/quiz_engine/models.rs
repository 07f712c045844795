use std::fmt;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::ConfigError;

// ---------------------------------------------------------------------------
// Operation / difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// All four operations in canonical (tab) order.
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition       => "+",
            Operation::Subtraction    => "-",
            Operation::Multiplication => "×",
            Operation::Division       => "÷",
        }
    }

    /// Short tag used as the problem id prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            Operation::Addition       => "ADD",
            Operation::Subtraction    => "SUB",
            Operation::Multiplication => "MUL",
            Operation::Division       => "DIV",
        }
    }

    /// Position in [`Operation::ALL`].
    pub fn index(self) -> usize {
        match self {
            Operation::Addition       => 0,
            Operation::Subtraction    => 1,
            Operation::Multiplication => 2,
            Operation::Division       => 3,
        }
    }

    /// Apply the operation. Division truncates, and a zero divisor yields 1.
    ///
    /// Arithmetic wraps on overflow, so hand-built problems outside the
    /// generator ranges never panic.
    pub fn apply(self, left: i32, right: i32) -> i32 {
        match self {
            Operation::Addition       => left.wrapping_add(right),
            Operation::Subtraction    => left.wrapping_sub(right),
            Operation::Multiplication => left.wrapping_mul(right),
            Operation::Division       => if right != 0 { left.wrapping_div(right) } else { 1 },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition       => write!(f, "Addition"),
            Operation::Subtraction    => write!(f, "Subtraction"),
            Operation::Multiplication => write!(f, "Multiplication"),
            Operation::Division       => write!(f, "Division"),
        }
    }
}

/// Selects the operand ranges used by the generators.
///
/// Serialized as the settings' raw value (`0|1|2`). Deserialization also
/// accepts the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDifficulty", into = "u8")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Medium,
        DifficultyLevel::Hard,
    ];

    /// Raw settings value (`Easy = 0`, `Medium = 1`, `Hard = 2`).
    pub fn as_raw(self) -> u8 {
        match self {
            DifficultyLevel::Easy   => 0,
            DifficultyLevel::Medium => 1,
            DifficultyLevel::Hard   => 2,
        }
    }
}

impl TryFrom<u8> for DifficultyLevel {
    type Error = ConfigError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(DifficultyLevel::Easy),
            1 => Ok(DifficultyLevel::Medium),
            2 => Ok(DifficultyLevel::Hard),
            other => Err(ConfigError::UnknownDifficulty(other)),
        }
    }
}

impl From<DifficultyLevel> for u8 {
    fn from(level: DifficultyLevel) -> u8 {
        level.as_raw()
    }
}

/// Difficulty as it appears in settings JSON: `2` or `"Hard"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawDifficulty {
    Level(u8),
    Name(String),
}

impl TryFrom<RawDifficulty> for DifficultyLevel {
    type Error = ConfigError;

    fn try_from(raw: RawDifficulty) -> Result<Self, Self::Error> {
        match raw {
            RawDifficulty::Level(level) => DifficultyLevel::try_from(level),
            RawDifficulty::Name(name) => match name.as_str() {
                "Easy"   => Ok(DifficultyLevel::Easy),
                "Medium" => Ok(DifficultyLevel::Medium),
                "Hard"   => Ok(DifficultyLevel::Hard),
                _ => Err(ConfigError::UnknownDifficultyName(name)),
            },
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Easy   => write!(f, "Easy"),
            DifficultyLevel::Medium => write!(f, "Medium"),
            DifficultyLevel::Hard   => write!(f, "Hard"),
        }
    }
}

// ---------------------------------------------------------------------------
// Problems
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub left: i32,
    pub right: i32,
    pub operation: Operation,
    /// Raw text as typed; may be empty or non-numeric.
    pub user_answer: String,
    /// Written only by the group scorer.
    pub(crate) is_solved: bool,
}

impl Problem {
    pub fn new(id: impl Into<String>, left: i32, right: i32, operation: Operation) -> Self {
        Problem {
            id: id.into(),
            left,
            right,
            operation,
            user_answer: String::new(),
            is_solved: false,
        }
    }

    /// Derived on every call so it can never drift from the operands.
    pub fn correct_answer(&self) -> i32 {
        self.operation.apply(self.left, self.right)
    }

    /// True once every member of this problem's group of three is correct.
    /// A solved problem no longer accepts edits.
    pub fn is_solved(&self) -> bool {
        self.is_solved
    }

    /// Prompt text shown next to the answer field, e.g. `"7 + 3 ="`.
    pub fn prompt(&self) -> String {
        format!("{} {} {} =", self.left, self.operation.symbol(), self.right)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operation.symbol(), self.right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub operation: Operation,
    pub difficulty: DifficultyLevel,
    pub count: usize,
    pub rng_seed: Option<u64>,
}

impl GenerationRequest {
    /// Entropy-seeded request.
    pub fn new(operation: Operation, difficulty: DifficultyLevel, count: usize) -> Self {
        GenerationRequest { operation, difficulty, count, rng_seed: None }
    }
}

// ---------------------------------------------------------------------------
// Category progress
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryState {
    /// Every problem in the set is answered correctly.
    pub completed: bool,
    /// At least one problem has been answered correctly.
    pub has_progress: bool,
}

impl CategoryState {
    pub fn status(self) -> CategoryStatus {
        if self.completed {
            CategoryStatus::Completed
        } else if self.has_progress {
            CategoryStatus::PartialProgress
        } else {
            CategoryStatus::NotStarted
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryStatus {
    NotStarted,
    PartialProgress,
    Completed,
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryStatus::NotStarted      => write!(f, "not started"),
            CategoryStatus::PartialProgress => write!(f, "in progress"),
            CategoryStatus::Completed       => write!(f, "completed"),
        }
    }
}

/// How `has_progress` reacts when a correct answer is edited away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressPolicy {
    /// Once set, `has_progress` stays true for the rest of the session.
    #[default]
    Sticky,
    /// `has_progress` is recomputed from scratch after every edit.
    Recompute,
}
