//! Fault types for the interpreter
//!
//! This module defines [`Fault`], every condition that halts a run other than
//! reaching the end of the program, and [`Outcome`], the result of a run.
//!
//! All faults are fatal. The dispatch loop never recovers locally; the fault is
//! handed to the run controller, which reports its kind and still prints the
//! debug dump.

use crate::memory::tape::Cell;
use std::fmt;

/// Conditions that halt execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// The program ended while loop frames were still open
    UnterminatedLoop { open_frames: usize },

    /// The tape pointer would have moved below index 0
    TapeBounds,

    /// The program counter points past the end of the program
    ProgramCounter { counter: usize, len: usize },

    /// `]` executed with no open loop frame
    InvalidLoop { position: usize },

    /// A symbol with no handler
    UnknownInstruction { symbol: char, position: usize },

    /// `.` on a cell that is not a Unicode scalar value
    InvalidCharacter { value: Cell, position: usize },

    /// Writing or flushing the output stream failed
    Output { message: String },

    /// Execution history outgrew its memory budget
    SnapshotLimit { current: usize, limit: usize },
}

impl Fault {
    /// Kind name reported to the user when a run halts
    pub fn name(&self) -> &'static str {
        match self {
            Fault::UnterminatedLoop { .. } => "UnterminatedLoopError",
            Fault::TapeBounds => "TapeBoundsError",
            Fault::ProgramCounter { .. } => "ProgramCounterError",
            Fault::InvalidLoop { .. } => "InvalidLoopError",
            Fault::UnknownInstruction { .. } => "UnknownInstructionError",
            Fault::InvalidCharacter { .. } => "InvalidCharacterError",
            Fault::Output { .. } => "OutputError",
            Fault::SnapshotLimit { .. } => "SnapshotLimitError",
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::UnterminatedLoop { open_frames } => {
                write!(
                    f,
                    "Program ended with {} open loop{}",
                    open_frames,
                    if *open_frames == 1 { "" } else { "s" }
                )
            }
            Fault::TapeBounds => write!(f, "Tape pointer moved below cell 0"),
            Fault::ProgramCounter { counter, len } => {
                write!(
                    f,
                    "Program counter {} is outside a program of length {}",
                    counter, len
                )
            }
            Fault::InvalidLoop { position } => {
                write!(f, "Unmatched ']' at position {}", position)
            }
            Fault::UnknownInstruction { symbol, position } => {
                write!(f, "Unknown instruction {:?} at position {}", symbol, position)
            }
            Fault::InvalidCharacter { value, position } => {
                write!(
                    f,
                    "Cell value {} is not a character (output at position {})",
                    value, position
                )
            }
            Fault::Output { message } => write!(f, "Output failed: {}", message),
            Fault::SnapshotLimit { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
        }
    }
}

impl std::error::Error for Fault {}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The program counter reached the end of the program with no open loops
    Finished,
    /// Execution halted on a fault
    Faulted(Fault),
}

impl Outcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, Outcome::Finished)
    }

    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Outcome::Finished => None,
            Outcome::Faulted(fault) => Some(fault),
        }
    }
}

impl From<Result<(), Fault>> for Outcome {
    fn from(result: Result<(), Fault>) -> Self {
        match result {
            Ok(()) => Outcome::Finished,
            Err(fault) => Outcome::Faulted(fault),
        }
    }
}
