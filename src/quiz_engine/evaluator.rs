use crate::quiz_engine::models::Problem;

/// Parse a typed answer, ignoring space characters anywhere in the text.
///
/// Returns `None` for empty or non-numeric input.
pub fn parse_answer(raw: &str) -> Option<i32> {
    let compact: String = raw.chars().filter(|&c| c != ' ').collect();
    compact.parse().ok()
}

/// True if `raw` parses to the problem's correct answer.
pub fn evaluate(problem: &Problem, raw: &str) -> bool {
    parse_answer(raw) == Some(problem.correct_answer())
}

/// Evaluate the answer currently stored on the problem.
pub fn is_answered_correctly(problem: &Problem) -> bool {
    evaluate(problem, &problem.user_answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::Operation;

    fn problem(left: i32, right: i32, operation: Operation) -> Problem {
        Problem::new("T-000-000000", left, right, operation)
    }

    #[test]
    fn spaces_are_ignored() {
        let p = problem(3, 4, Operation::Addition);
        assert!(evaluate(&p, "7"));
        assert!(evaluate(&p, " 7 "));
        assert!(evaluate(&p, "  7"));
    }

    #[test]
    fn interior_spaces_are_stripped_too() {
        let p = problem(6, 7, Operation::Multiplication);
        assert!(evaluate(&p, "4 2"));
    }

    #[test]
    fn garbage_is_simply_wrong() {
        let p = problem(3, 4, Operation::Addition);
        for raw in ["", "   ", "seven", "7a", "7.0", "--7"] {
            assert!(!evaluate(&p, raw), "{raw:?} should not match");
        }
    }

    #[test]
    fn negative_answers_parse() {
        assert_eq!(parse_answer("-3"), Some(-3));
    }

    #[test]
    fn division_checks_truncated_quotient() {
        let p = problem(12, 4, Operation::Division);
        assert!(evaluate(&p, "3"));
        assert!(!evaluate(&p, "4"));
    }
}
