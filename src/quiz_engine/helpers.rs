//! Shared building blocks for the operand generators.
//!
//! Multiplication and division draw operands and redraw until a constraint
//! holds. Every range in the generator tables admits at least one valid draw,
//! but the loop is still capped so that a future table change which makes a
//! constraint unsatisfiable fails with an error instead of spinning forever.

use log::warn;
use rand::Rng;

use crate::quiz_engine::{
    error::EngineError,
    models::{DifficultyLevel, Operation},
};

/// Upper bound on draws for a single problem.
pub const MAX_DRAWS: u32 = 1_000;

/// Draw counts above this are logged; the tables make them very unlikely.
const SLOW_DRAW_THRESHOLD: u32 = 100;

/// Call `draw` until `accept` holds, at most [`MAX_DRAWS`] times.
pub fn sample_until<R: Rng>(
    rng: &mut R,
    operation: Operation,
    difficulty: DifficultyLevel,
    mut draw: impl FnMut(&mut R) -> (i32, i32),
    accept: impl Fn((i32, i32)) -> bool,
) -> Result<(i32, i32), EngineError> {
    for attempt in 1..=MAX_DRAWS {
        let operands = draw(rng);
        if accept(operands) {
            if attempt > SLOW_DRAW_THRESHOLD {
                warn!("{operation} at {difficulty} needed {attempt} draws");
            }
            return Ok(operands);
        }
    }
    Err(EngineError::Unsatisfiable { operation, difficulty, attempts: MAX_DRAWS })
}
