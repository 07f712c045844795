use std::ops::RangeInclusive;
use rand::Rng;

use crate::quiz_engine::{error::EngineError, models::DifficultyLevel};

/// Range for the minuend, and the lowest allowed subtrahend.
///
/// The subtrahend is drawn from `right_min..=left - 1`, so every left bound
/// must be strictly greater than `right_min` for that range to be non-empty.
pub fn operand_bounds(difficulty: DifficultyLevel) -> (RangeInclusive<i32>, i32) {
    match difficulty {
        DifficultyLevel::Easy   => (2..=20, 1),
        DifficultyLevel::Medium => (2..=49, 1),
        DifficultyLevel::Hard   => (10..=99, 9),
    }
}

pub fn draw<R: Rng>(rng: &mut R, difficulty: DifficultyLevel) -> Result<(i32, i32), EngineError> {
    let (left_range, right_min) = operand_bounds(difficulty);
    let left = rng.gen_range(left_range);
    let right = rng.gen_range(right_min..=left - 1);
    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn right_range_is_never_empty() {
        for d in DifficultyLevel::ALL {
            let (left, right_min) = operand_bounds(d);
            assert!(*left.start() > right_min, "{d}: empty subtrahend range");
        }
    }

    #[test]
    fn result_is_positive() {
        let mut rng = StdRng::seed_from_u64(11);
        for d in DifficultyLevel::ALL {
            for _ in 0..300 {
                let (l, r) = draw(&mut rng, d).unwrap();
                assert!(r >= 1 && r < l, "{d}: {l} - {r}");
            }
        }
    }
}
