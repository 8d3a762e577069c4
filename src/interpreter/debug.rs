//! Post-run diagnostics
//!
//! [`DebugDump`] renders the final program counter, the program text with the
//! instruction under the counter wrapped in braces, and the whole tape. It only
//! reads the state. [`write_report`] is the run controller's epilogue: the
//! trailing newline or fault line, followed by the dump.

use crate::interpreter::constants::{DEBUG_FOOTER, DEBUG_HEADER};
use crate::interpreter::errors::Outcome;
use crate::interpreter::state::ExecState;
use std::fmt;
use std::io::{self, Write};

/// Read-only view of a state, formatted as the debug dump
pub struct DebugDump<'a> {
    state: &'a ExecState,
}

impl<'a> DebugDump<'a> {
    pub fn new(state: &'a ExecState) -> Self {
        DebugDump { state }
    }
}

impl fmt::Display for DebugDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let program = self.state.program();
        let counter = self.state.counter();

        writeln!(f, "{}", DEBUG_HEADER)?;
        writeln!(f, "Program Counter: {}", counter)?;
        if let Some(current) = program.get(counter) {
            let before: String = program[..counter].iter().collect();
            let after: String = program[counter + 1..].iter().collect();
            writeln!(f, "{}{{{}}}{}", before, current, after)?;
        }
        writeln!(f, "Tape:")?;
        writeln!(f, "{:?}", self.state.tape().cells())?;
        writeln!(f, "{}", DEBUG_FOOTER)
    }
}

/// Write the end-of-run report.
///
/// A finished run gets a single newline; a faulted run gets `Fault: <kind>`.
/// The debug dump follows either way.
pub fn write_report<O: Write + ?Sized>(
    out: &mut O,
    state: &ExecState,
    outcome: &Outcome,
) -> io::Result<()> {
    match outcome {
        Outcome::Finished => writeln!(out)?,
        Outcome::Faulted(fault) => writeln!(out, "Fault: {}", fault.name())?,
    }
    write!(out, "{}", DebugDump::new(state))?;
    out.flush()
}
