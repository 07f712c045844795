use log::debug;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::quiz_engine::{
    error::EngineError,
    models::{DifficultyLevel, GenerationRequest, Operation, Problem},
    operations,
};

/// Id unique within a session: operation prefix plus position, with a random
/// suffix so ids differ between sessions.
fn make_problem_id(operation: Operation, index: usize, rng: &mut impl RngCore) -> String {
    format!("{}-{:03}-{:06X}", operation.prefix(), index, rng.next_u32() & 0x00FF_FFFF)
}

/// Draw one `(left, right)` pair for `operation`.
pub fn draw_operands<R: Rng>(
    rng: &mut R,
    operation: Operation,
    difficulty: DifficultyLevel,
) -> Result<(i32, i32), EngineError> {
    match operation {
        Operation::Addition =>
            operations::addition::draw(rng, difficulty),

        Operation::Subtraction =>
            operations::subtraction::draw(rng, difficulty),

        Operation::Multiplication =>
            operations::multiplication::draw(rng, difficulty),

        Operation::Division =>
            operations::division::draw(rng, difficulty),
    }
}

/// Generate `count` freshly drawn problems. Duplicates are allowed.
///
/// Fails up front if the operand table admits no valid pair at all.
pub fn generate_with_rng<R: Rng>(
    rng: &mut R,
    operation: Operation,
    difficulty: DifficultyLevel,
    count: usize,
) -> Result<Vec<Problem>, EngineError> {
    if !operations::is_satisfiable(operation, difficulty) {
        return Err(EngineError::Unsatisfiable { operation, difficulty, attempts: 0 });
    }
    let mut problems = Vec::with_capacity(count);
    for index in 0..count {
        let (left, right) = draw_operands(rng, operation, difficulty)?;
        let id = make_problem_id(operation, index, rng);
        problems.push(Problem::new(id, left, right, operation));
    }
    debug!("generated {} {operation} problems at {difficulty}", problems.len());
    Ok(problems)
}

/// Entry point: seeds an RNG from the request and generates the problem list.
pub fn generate_problems(request: GenerationRequest) -> Result<Vec<Problem>, EngineError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_with_rng(&mut rng, request.operation, request.difficulty, request.count)
}
