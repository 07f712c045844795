//! Operand generators, one module per operation.
//!
//! Every module exposes the same signature:
//!
//! ```ignore
//! pub fn draw<R: Rng>(
//!     rng: &mut R,
//!     difficulty: DifficultyLevel,
//! ) -> Result<(i32, i32), EngineError>
//! ```
//!
//! returning `(left, right)`. The generator dispatches to these via
//! `generator.rs`. [`ranges`] and [`is_valid`] describe the same tables as
//! data.

use std::ops::RangeInclusive;

use crate::quiz_engine::models::{DifficultyLevel, Operation};

pub mod addition;
pub mod subtraction;
/// Rejection-sampled: product ≤ 100.
pub mod multiplication;
/// Rejection-sampled: strictly positive integer quotient.
pub mod division;

/// Outer bounds of both operands for one operation and difficulty.
///
/// For subtraction the subtrahend is further limited to `left - 1`; for
/// division the dividend is a multiple of the divisor. [`is_valid`] applies
/// those per-pair rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandRanges {
    pub left: RangeInclusive<i32>,
    pub right: RangeInclusive<i32>,
}

pub fn ranges(operation: Operation, difficulty: DifficultyLevel) -> OperandRanges {
    match operation {
        Operation::Addition => {
            let range = addition::operand_range(difficulty);
            OperandRanges { left: range.clone(), right: range }
        }
        Operation::Subtraction => {
            let (left, right_min) = subtraction::operand_bounds(difficulty);
            let right = right_min..=*left.end() - 1;
            OperandRanges { left, right }
        }
        Operation::Multiplication => {
            let range = multiplication::operand_range(difficulty);
            OperandRanges { left: range.clone(), right: range }
        }
        Operation::Division => {
            let (divisors, multipliers) = division::operand_bounds(difficulty);
            let left = divisors.start() * multipliers.start()..=divisors.end() * multipliers.end();
            OperandRanges { left, right: divisors }
        }
    }
}

/// Whether `(left, right)` is a problem the generator could produce.
pub fn is_valid(operation: Operation, difficulty: DifficultyLevel, left: i32, right: i32) -> bool {
    let bounds = ranges(operation, difficulty);
    if !bounds.left.contains(&left) || !bounds.right.contains(&right) {
        return false;
    }
    match operation {
        Operation::Addition       => true,
        Operation::Subtraction    => right < left,
        Operation::Multiplication => multiplication::accepts(left, right),
        Operation::Division => {
            let (_, multipliers) = division::operand_bounds(difficulty);
            left % right == 0 && division::accepts(left, right) && multipliers.contains(&(left / right))
        }
    }
}

/// True if at least one operand pair satisfies the table, i.e. the
/// rejection loop for this combination can terminate.
pub fn is_satisfiable(operation: Operation, difficulty: DifficultyLevel) -> bool {
    let bounds = ranges(operation, difficulty);
    bounds.left.clone().any(|left| {
        bounds
            .right
            .clone()
            .any(|right| is_valid(operation, difficulty, left, right))
    })
}
