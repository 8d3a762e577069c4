// Integration tests for the interpreter

use brainf::interpreter::engine::{run_program, Interpreter};
use brainf::interpreter::errors::{Fault, Outcome};
use std::io;

fn run(program: &str) -> (Outcome, Interpreter<Vec<u8>>) {
    let mut interpreter = Interpreter::new(program, Vec::new());
    let outcome = interpreter.run();
    (outcome, interpreter)
}

fn report(program: &str) -> (Outcome, String) {
    let (outcome, output) = run_program(program, Vec::new()).expect("writing to a Vec succeeds");
    (outcome, String::from_utf8(output).expect("report is UTF-8"))
}

#[test]
fn test_print_prints_char_then_newline_and_dump() {
    let (outcome, text) = report("+++.");

    assert_eq!(outcome, Outcome::Finished);
    assert_eq!(
        text,
        "\u{3}\n\
         ============= DEBUG =============\n\
         Program Counter: 4\n\
         Tape:\n\
         [3]\n\
         ==================================\n"
    );
}

#[test]
fn test_empty_program_finishes_immediately() {
    let (outcome, interpreter) = run("");

    assert!(outcome.is_finished());
    assert_eq!(outcome.fault(), None);
    assert_eq!(interpreter.steps(), 0);
    assert_eq!(interpreter.state().tape().cells(), &[0]);
}

#[test]
fn test_multiplication_loop_prints_letter() {
    let (outcome, interpreter) = run("++++++++[>++++++++<-]>+.");

    assert_eq!(outcome, Outcome::Finished);
    assert_eq!(interpreter.output().as_slice(), b"A");
    assert_eq!(interpreter.state().tape().cells(), &[0, 65]);
    assert_eq!(interpreter.transcript(), "");
}

#[test]
fn test_plain_run_keeps_no_transcript() {
    let program = format!("{}{}", "+".repeat(65), ".".repeat(1_000));
    let mut interpreter = Interpreter::new(&program, io::sink());

    assert_eq!(interpreter.run(), Outcome::Finished);
    assert!(interpreter.transcript().is_empty());
}

#[test]
fn test_output_is_utf8_encoded() {
    // 233 = 'é', two bytes in UTF-8
    let program = format!("{}.", "+".repeat(233));
    let (outcome, interpreter) = run(&program);

    assert_eq!(outcome, Outcome::Finished);
    assert_eq!(interpreter.output().as_slice(), "é".as_bytes());
}

#[test]
fn test_negative_cell_cannot_be_printed() {
    let (outcome, text) = report("-.");

    assert_eq!(
        outcome,
        Outcome::Faulted(Fault::InvalidCharacter {
            value: -1,
            position: 1
        })
    );
    assert!(text.starts_with("Fault: InvalidCharacterError\n"));
    assert!(text.contains("-{.}\n"));
    assert!(text.contains("[-1]\n"));
}

#[test]
fn test_lone_close_is_invalid_loop() {
    let (outcome, text) = report("]");

    assert_eq!(outcome, Outcome::Faulted(Fault::InvalidLoop { position: 0 }));
    assert_eq!(
        text,
        "Fault: InvalidLoopError\n\
         ============= DEBUG =============\n\
         Program Counter: 0\n\
         {]}\n\
         Tape:\n\
         [0]\n\
         ==================================\n"
    );
}

#[test]
fn test_lone_move_left_is_tape_bounds() {
    let (outcome, text) = report("<");

    assert_eq!(outcome, Outcome::Faulted(Fault::TapeBounds));
    assert!(text.starts_with("Fault: TapeBoundsError\n"));
    assert!(text.contains("Program Counter: 0\n{<}\n"));
}

#[test]
fn test_move_left_at_origin_faults_whatever_the_cells_hold() {
    for program in ["<", "+++<", "-<", ">+<<", "+>-<<"] {
        let (outcome, _) = run(program);
        assert_eq!(
            outcome,
            Outcome::Faulted(Fault::TapeBounds),
            "program {:?}",
            program
        );
    }
}

#[test]
fn test_unknown_symbol_is_reported_with_context() {
    let (outcome, text) = report("+a+");

    assert_eq!(
        outcome,
        Outcome::Faulted(Fault::UnknownInstruction {
            symbol: 'a',
            position: 1
        })
    );
    assert!(text.contains("Program Counter: 1\n+{a}+\n"));
    assert!(text.contains("[1]\n"));
}

#[test]
fn test_input_instruction_is_not_supported() {
    let (outcome, _) = run(",");
    assert_eq!(
        outcome,
        Outcome::Faulted(Fault::UnknownInstruction {
            symbol: ',',
            position: 0
        })
    );
}

#[test]
fn test_unclosed_loop_is_unterminated() {
    let (outcome, text) = report("+[");

    assert_eq!(
        outcome,
        Outcome::Faulted(Fault::UnterminatedLoop { open_frames: 1 })
    );
    // The counter sits at end of program, so no instruction is highlighted
    assert!(text.contains("Program Counter: 2\nTape:\n[1]\n"));
    assert!(!text.contains('{'));
}

#[test]
fn test_output_before_fault_is_kept() {
    let (outcome, text) = report("++++++++[>++++++++<-]>+.<<");

    assert_eq!(outcome, Outcome::Faulted(Fault::TapeBounds));
    // No newline between program output and the fault line
    assert!(text.starts_with("AFault: TapeBoundsError\n"));
}

#[test]
fn test_cells_wrap_below_zero() {
    let (outcome, interpreter) = run("--");
    assert_eq!(outcome, Outcome::Finished);
    assert_eq!(interpreter.state().tape().cells(), &[-2]);
}

#[test]
fn test_move_right_then_left_round_trips() {
    for prefix in ["", "+", ">>+", "+>+>+<", "+++>>>--<"] {
        let (_, before) = run(prefix);
        let (_, after) = run(&format!("{}><", prefix));

        let before = before.state().tape();
        let after = after.state().tape();

        assert_eq!(after.pointer(), before.pointer(), "prefix {:?}", prefix);
        assert_eq!(&after.cells()[..before.len()], before.cells());
        assert!(after.cells()[before.len()..].iter().all(|&cell| cell == 0));
    }
}

#[test]
fn test_run_is_idempotent_once_finished() {
    let mut interpreter = Interpreter::new("+.", Vec::new());
    assert_eq!(interpreter.run(), Outcome::Finished);
    assert_eq!(interpreter.run(), Outcome::Finished);
    assert_eq!(interpreter.output().as_slice(), b"\x01");
}
