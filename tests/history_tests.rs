// Execution history and time-travel navigation

use brainf::interpreter::constants::DEFAULT_SNAPSHOT_LIMIT;
use brainf::interpreter::engine::Interpreter;
use brainf::interpreter::errors::{Fault, Outcome};
use brainf::interpreter::history::HistoryError;
use std::io;

fn recorded(program: &str) -> Interpreter<io::Sink> {
    let mut interpreter = Interpreter::with_history(program, io::sink(), DEFAULT_SNAPSHOT_LIMIT);
    interpreter.run();
    interpreter
}

#[test]
fn test_one_snapshot_per_step_plus_final() {
    let interpreter = recorded("+[-]");

    assert_eq!(interpreter.outcome(), Some(&Outcome::Finished));
    assert_eq!(interpreter.total_snapshots(), 5);
    assert_eq!(interpreter.history_position(), 4);
}

#[test]
fn test_step_through_history() {
    let mut interpreter = recorded("+[-]");

    interpreter.rewind_to_start().unwrap();
    assert_eq!(interpreter.state().counter(), 0);
    assert_eq!(interpreter.state().tape().cells(), &[0]);
    assert_eq!(interpreter.steps(), 0);

    interpreter.step_forward().unwrap();
    assert_eq!(interpreter.state().counter(), 1);
    assert_eq!(interpreter.state().tape().cells(), &[1]);

    interpreter.step_forward().unwrap();
    assert_eq!(interpreter.state().loop_frames().len(), 1);

    interpreter.step_backward().unwrap();
    assert_eq!(interpreter.state().counter(), 1);
    assert!(interpreter.state().loop_frames().is_empty());

    interpreter.jump_to_end().unwrap();
    assert_eq!(interpreter.state().counter(), 4);
    assert_eq!(interpreter.steps(), 4);
}

#[test]
fn test_history_edges() {
    let mut interpreter = recorded("+");

    assert_eq!(interpreter.step_forward(), Err(HistoryError::AtEnd));

    interpreter.rewind_to_start().unwrap();
    assert_eq!(interpreter.step_backward(), Err(HistoryError::AtStart));
}

#[test]
fn test_no_history_without_recording() {
    let mut interpreter = Interpreter::new("+", Vec::new());
    interpreter.run();

    assert_eq!(interpreter.total_snapshots(), 0);
    assert_eq!(interpreter.step_forward(), Err(HistoryError::Empty));
    assert_eq!(interpreter.rewind_to_start(), Err(HistoryError::Empty));
}

#[test]
fn test_transcript_follows_history() {
    let mut interpreter = recorded("++++++++[>++++++++<-]>+.");
    assert_eq!(interpreter.transcript(), "A");

    interpreter.rewind_to_start().unwrap();
    assert_eq!(interpreter.transcript(), "");

    interpreter.jump_to_end().unwrap();
    assert_eq!(interpreter.transcript(), "A");
}

#[test]
fn test_faulted_run_ends_history_at_fault() {
    let mut interpreter = recorded("+<");

    assert_eq!(
        interpreter.outcome(),
        Some(&Outcome::Faulted(Fault::TapeBounds))
    );

    interpreter.jump_to_end().unwrap();
    let snapshot = interpreter.current_snapshot().expect("final snapshot");
    assert_eq!(snapshot.state.counter(), 1);
    assert_eq!(snapshot.step, 1);
}

#[test]
fn test_snapshot_budget_is_enforced() {
    let mut interpreter = Interpreter::with_history("+[-]", io::sink(), 1);
    let outcome = interpreter.run();

    match outcome {
        Outcome::Faulted(fault @ Fault::SnapshotLimit { .. }) => {
            assert_eq!(fault.name(), "SnapshotLimitError");
        }
        other => panic!("expected snapshot limit fault, got {:?}", other),
    }
    assert_eq!(interpreter.steps(), 0);
    assert_eq!(interpreter.total_snapshots(), 0);
}

#[test]
fn test_long_straight_line_program_fits_default_budget() {
    let interpreter = recorded(&"+".repeat(10_000));

    assert_eq!(interpreter.outcome(), Some(&Outcome::Finished));
    assert_eq!(interpreter.steps(), 10_000);
    assert_eq!(interpreter.total_snapshots(), 10_001);
    assert_eq!(interpreter.state().tape().cells(), &[10_000]);
}
