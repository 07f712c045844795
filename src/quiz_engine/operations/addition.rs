use std::ops::RangeInclusive;
use rand::Rng;

use crate::quiz_engine::{error::EngineError, models::DifficultyLevel};

/// Both operands are drawn independently from this range.
pub fn operand_range(difficulty: DifficultyLevel) -> RangeInclusive<i32> {
    match difficulty {
        DifficultyLevel::Easy   => 1..=10,
        DifficultyLevel::Medium => 1..=20,
        DifficultyLevel::Hard   => 9..=50,
    }
}

pub fn draw<R: Rng>(rng: &mut R, difficulty: DifficultyLevel) -> Result<(i32, i32), EngineError> {
    let range = operand_range(difficulty);
    Ok((rng.gen_range(range.clone()), rng.gen_range(range)))
}
