//! End-to-end walk through one practice session.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! Lives under `demos/` rather than the usual `examples/` and is registered
//! through `[[example]]` in `Cargo.toml`, so the cargo command is unchanged.
//!
//! 1. Starts a seeded session with all four operations (Easy, 6 examples).
//! 2. Prints each grid the way the app lays it out: rows of three.
//! 3. Types a wrong answer, shows that the group stays unsolved, fixes it.
//! 4. Solves everything and prints the leaderboard record.

use std::time::Duration;

use arithmetic_drill::{
    format_elapsed, to_leaderboard_json, DifficultyLevel, Operation, Session, SessionConfig,
    SessionEvent,
};

fn print_grid(session: &Session, op: Operation) {
    let Some(problems) = session.problems(op) else { return };
    let status = session
        .category_status(op)
        .map(|s| s.to_string())
        .unwrap_or_default();
    println!("── {op} ({status}) ──");
    for row in problems.chunks(3) {
        let cells: Vec<String> = row
            .iter()
            .map(|p| {
                let mark = if p.is_solved() { "✓" } else { " " };
                format!("{:>10} {:<4}{mark}", p.prompt(), p.user_answer)
            })
            .collect();
        println!("  {}", cells.join("   "));
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SessionConfig::new(DifficultyLevel::Easy, 6, &Operation::ALL).with_seed(2024);
    let mut session = Session::start(config)?;

    for op in Operation::ALL {
        print_grid(&session, op);
    }

    // A wrong third answer keeps the whole first group open.
    let answers: Vec<String> = session
        .problems(Operation::Addition)
        .unwrap_or_default()
        .iter()
        .map(|p| p.correct_answer().to_string())
        .collect();
    session.set_answer(Operation::Addition, 0, answers[0].clone())?;
    session.set_answer(Operation::Addition, 1, answers[1].clone())?;
    session.set_answer(Operation::Addition, 2, "0")?;
    print_grid(&session, Operation::Addition);

    let event = session.set_answer(Operation::Addition, 2, format!(" {} ", answers[2]))?;
    println!("fixed third answer → {event:?}\n");
    print_grid(&session, Operation::Addition);

    let mut last = event;
    for op in Operation::ALL {
        let answers: Vec<String> = session
            .problems(op)
            .unwrap_or_default()
            .iter()
            .map(|p| p.correct_answer().to_string())
            .collect();
        for (i, answer) in answers.into_iter().enumerate() {
            if session.problems(op).is_some_and(|ps| ps[i].is_solved()) {
                continue;
            }
            last = session.set_answer(op, i, answer)?;
        }
    }

    for op in Operation::ALL {
        print_grid(&session, op);
    }

    if let SessionEvent::Completed { leaderboard_eligible } = last {
        let elapsed = Duration::from_millis(83_470);
        println!("Victory in {} (leaderboard eligible: {leaderboard_eligible})", format_elapsed(elapsed));
        if let Some(result) = session.game_result("Ada", elapsed) {
            println!("{}", serde_json::to_string_pretty(&to_leaderboard_json(&result))?);
        }
    }
    Ok(())
}
