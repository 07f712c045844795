//! All-or-nothing scoring of consecutive groups of three problems.

use crate::quiz_engine::{evaluator::is_answered_correctly, models::Problem};

pub const GROUP_SIZE: usize = 3;

/// Index of the group owning problem `index`.
pub fn group_of(index: usize) -> usize {
    index / GROUP_SIZE
}

/// Recompute `is_solved` for every complete group.
///
/// A group is solved only when all three answers are correct, and then all
/// three members are marked. A trailing partial group is left untouched.
/// Returns the number of problems whose flag changed.
pub fn recompute(problems: &mut [Problem]) -> usize {
    let mut changed = 0;
    for group in problems.chunks_exact_mut(GROUP_SIZE) {
        let solved = group.iter().all(is_answered_correctly);
        for problem in group.iter_mut() {
            if problem.is_solved != solved {
                problem.is_solved = solved;
                changed += 1;
            }
        }
    }
    changed
}

/// Number of complete groups whose members are all solved.
pub fn solved_groups(problems: &[Problem]) -> usize {
    problems
        .chunks_exact(GROUP_SIZE)
        .filter(|g| g.iter().all(Problem::is_solved))
        .count()
}
