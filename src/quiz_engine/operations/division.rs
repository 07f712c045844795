use std::ops::RangeInclusive;
use rand::Rng;

use crate::quiz_engine::{
    error::EngineError,
    helpers::sample_until,
    models::{DifficultyLevel, Operation},
};

/// Divisor range and quotient (multiplier) range. The dividend is
/// `divisor * multiplier`, so every problem divides evenly.
pub fn operand_bounds(difficulty: DifficultyLevel) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
    match difficulty {
        DifficultyLevel::Easy   => (1..=5, 1..=5),
        DifficultyLevel::Medium => (1..=6, 1..=6),
        DifficultyLevel::Hard   => (2..=10, 2..=9),
    }
}

pub fn accepts(left: i32, right: i32) -> bool {
    right != 0 && left / right > 0
}

pub fn draw<R: Rng>(rng: &mut R, difficulty: DifficultyLevel) -> Result<(i32, i32), EngineError> {
    let (divisors, multipliers) = operand_bounds(difficulty);
    sample_until(
        rng,
        Operation::Division,
        difficulty,
        |rng| {
            let right = rng.gen_range(divisors.clone());
            (right * rng.gen_range(multipliers.clone()), right)
        },
        |(l, r)| accepts(l, r),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn all_bounds_are_strictly_positive() {
        for d in DifficultyLevel::ALL {
            let (divisors, multipliers) = operand_bounds(d);
            assert!(*divisors.start() >= 1 && *multipliers.start() >= 1, "{d}");
        }
    }

    #[test]
    fn quotient_within_multiplier_range() {
        let mut rng = StdRng::seed_from_u64(8);
        for d in DifficultyLevel::ALL {
            let (divisors, multipliers) = operand_bounds(d);
            for _ in 0..300 {
                let (l, r) = draw(&mut rng, d).unwrap();
                assert!(divisors.contains(&r));
                assert_eq!(l % r, 0);
                assert!(multipliers.contains(&(l / r)), "{d}: {l} ÷ {r}");
            }
        }
    }
}
