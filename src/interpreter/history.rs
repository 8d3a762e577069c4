//! Time-travel navigation over recorded execution history.
//!
//! Adds `impl Interpreter` methods that move through the snapshots taken by
//! an interpreter built with [`Interpreter::with_history`]. Restoring a
//! snapshot replaces the visible execution state and output transcript; it
//! never re-executes instructions.

use crate::interpreter::engine::Interpreter;
use crate::snapshot::Snapshot;
use std::fmt;
use std::io::Write;

/// Why a history move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// Nothing was recorded (history disabled or run not started)
    Empty,
    /// Already at the first snapshot
    AtStart,
    /// Already at the last snapshot
    AtEnd,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Empty => write!(f, "No snapshots available"),
            HistoryError::AtStart => write!(f, "Already at the beginning of execution"),
            HistoryError::AtEnd => write!(f, "No more snapshots available (execution finished)"),
        }
    }
}

impl std::error::Error for HistoryError {}

impl<W: Write> Interpreter<W> {
    /// Index of the snapshot currently shown
    pub fn history_position(&self) -> usize {
        self.history_position
    }

    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.as_ref().map_or(0, |manager| manager.len())
    }

    /// Restore the previous snapshot
    pub fn step_backward(&mut self) -> Result<(), HistoryError> {
        if self.total_snapshots() == 0 {
            return Err(HistoryError::Empty);
        }
        if self.history_position == 0 {
            return Err(HistoryError::AtStart);
        }
        self.restore(self.history_position - 1)
    }

    /// Restore the next snapshot
    pub fn step_forward(&mut self) -> Result<(), HistoryError> {
        let total = self.total_snapshots();
        if total == 0 {
            return Err(HistoryError::Empty);
        }
        if self.history_position + 1 >= total {
            return Err(HistoryError::AtEnd);
        }
        self.restore(self.history_position + 1)
    }

    /// Rewind to the state before the first instruction
    pub fn rewind_to_start(&mut self) -> Result<(), HistoryError> {
        self.restore(0)
    }

    /// Jump to the state where the run stopped
    pub fn jump_to_end(&mut self) -> Result<(), HistoryError> {
        let total = self.total_snapshots();
        if total == 0 {
            return Err(HistoryError::Empty);
        }
        self.restore(total - 1)
    }

    /// Snapshot at the current history position
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.snapshot_manager.as_ref()?.get(self.history_position)
    }

    fn restore(&mut self, index: usize) -> Result<(), HistoryError> {
        let snapshot = self
            .snapshot_manager
            .as_ref()
            .and_then(|manager| manager.get(index))
            .ok_or(HistoryError::Empty)?;

        self.state = snapshot.state.clone();
        self.console.rewind_transcript(snapshot.output_len);
        self.steps = snapshot.step;
        self.history_position = index;
        Ok(())
    }
}
