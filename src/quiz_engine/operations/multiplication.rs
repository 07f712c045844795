use std::ops::RangeInclusive;
use rand::Rng;

use crate::quiz_engine::{
    error::EngineError,
    helpers::sample_until,
    models::{DifficultyLevel, Operation},
};

pub const MAX_PRODUCT: i32 = 100;

pub fn operand_range(difficulty: DifficultyLevel) -> RangeInclusive<i32> {
    match difficulty {
        DifficultyLevel::Easy   => 1..=6,
        DifficultyLevel::Medium => 1..=10,
        DifficultyLevel::Hard   => 2..=50,
    }
}

pub fn accepts(left: i32, right: i32) -> bool {
    left * right <= MAX_PRODUCT
}

pub fn draw<R: Rng>(rng: &mut R, difficulty: DifficultyLevel) -> Result<(i32, i32), EngineError> {
    let range = operand_range(difficulty);
    sample_until(
        rng,
        Operation::Multiplication,
        difficulty,
        |rng| (rng.gen_range(range.clone()), rng.gen_range(range.clone())),
        |(l, r)| accepts(l, r),
    )
}
