// Execution engine for the interpreter

use crate::interpreter::debug::write_report;
use crate::interpreter::errors::{Fault, Outcome};
use crate::interpreter::instruction::Instruction;
use crate::interpreter::state::ExecState;
use crate::snapshot::{Console, Snapshot, SnapshotManager};
use std::io::{self, Write};

/// The interpreter that runs one program
pub struct Interpreter<W: Write> {
    /// Program text, counter, tape and loop frames
    pub(crate) state: ExecState,

    /// Output stream with transcript
    pub(crate) console: Console<W>,

    /// Recorded history, only present in history mode
    pub(crate) snapshot_manager: Option<SnapshotManager>,

    /// Current position in execution history (for stepping backward/forward)
    pub(crate) history_position: usize,

    /// Instructions executed so far
    pub(crate) steps: usize,

    /// Set once the run has ended
    outcome: Option<Outcome>,
}

impl<W: Write> Interpreter<W> {
    /// Create an interpreter for an already-normalized program
    pub fn new(program: &str, output: W) -> Self {
        Self::with_parts(program, Console::new(output), None)
    }

    /// Create an interpreter that records a snapshot before every instruction
    /// and keeps a transcript of the output
    pub fn with_history(program: &str, output: W, snapshot_memory_limit: usize) -> Self {
        Self::with_parts(
            program,
            Console::recording(output),
            Some(SnapshotManager::new(snapshot_memory_limit)),
        )
    }

    fn with_parts(
        program: &str,
        console: Console<W>,
        snapshot_manager: Option<SnapshotManager>,
    ) -> Self {
        Interpreter {
            state: ExecState::new(program),
            console,
            snapshot_manager,
            history_position: 0,
            steps: 0,
            outcome: None,
        }
    }

    /// Run the program until it ends or faults
    pub fn run(&mut self) -> Outcome {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        let mut result = loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(fault) => break Err(fault),
            }
        };

        // Final state, so history can show where the run stopped
        if let Err(fault) = self.take_snapshot() {
            result = result.and(Err(fault));
        }

        let outcome = Outcome::from(result);
        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Execute one instruction.
    ///
    /// Returns `Ok(false)` when the program counter is already at the end of
    /// the program and nothing was executed.
    pub fn step(&mut self) -> Result<bool, Fault> {
        let Some(symbol) = self.state.current_instruction()? else {
            return Ok(false);
        };

        self.take_snapshot()?;

        let instruction = Instruction::decode(symbol).ok_or(Fault::UnknownInstruction {
            symbol,
            position: self.state.counter(),
        })?;
        instruction.execute(&mut self.state, &mut self.console)?;
        self.steps += 1;

        Ok(true)
    }

    /// Record the current state in history, if history is enabled
    fn take_snapshot(&mut self) -> Result<(), Fault> {
        let Some(manager) = self.snapshot_manager.as_mut() else {
            return Ok(());
        };

        let snapshot = Snapshot {
            state: self.state.clone(),
            output_len: self.console.transcript_len(),
            step: self.steps,
        };

        let limit = manager.memory_limit();
        manager
            .push(snapshot)
            .map_err(|current| Fault::SnapshotLimit { current, limit })?;

        self.history_position = manager.len() - 1;
        Ok(())
    }

    // ========== Getter methods for UI ==========

    pub fn state(&self) -> &ExecState {
        &self.state
    }

    /// Output written so far; only recorded with history enabled
    pub fn transcript(&self) -> &str {
        self.console.transcript()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// How the run ended, once it has
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn output(&self) -> &W {
        self.console.get_ref()
    }

    pub fn into_output(self) -> W {
        self.console.into_inner()
    }
}

/// Run a program start to finish and append the end-of-run report.
///
/// Program output and the report go to the same stream; the debug dump is
/// written exactly once whatever the outcome.
pub fn run_program<W: Write>(program: &str, output: W) -> io::Result<(Outcome, W)> {
    let mut interpreter = Interpreter::new(program, output);
    let outcome = interpreter.run();

    let state = interpreter.state.clone();
    let mut output = interpreter.into_output();
    write_report(&mut output, &state, &outcome)?;

    Ok((outcome, output))
}
