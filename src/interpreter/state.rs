//! Execution state
//!
//! [`ExecState`] owns everything a run mutates: the program text, the program
//! counter, the [`Tape`] and the loop-frame stack. Instruction handlers only
//! touch the run through the primitives defined here.

use crate::interpreter::errors::Fault;
use crate::memory::tape::Tape;
use std::rc::Rc;

/// Snapshot of a loop entry.
///
/// Records where the `[` sits in the program and which cell was current when
/// it executed. Both are plain indices, so a frame stays valid while the tape
/// grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopFrame {
    /// Program counter of the opening `[`
    pub open_pc: usize,
    /// Tape pointer at the moment the loop was entered
    pub cell: usize,
}

/// Complete state of one run.
///
/// The program text never changes, so clones share it.
#[derive(Debug, Clone)]
pub struct ExecState {
    program: Rc<[char]>,
    counter: usize,
    tape: Tape,
    loop_frames: Vec<LoopFrame>,
}

impl ExecState {
    /// Create a fresh state for an already-normalized program
    pub fn new(program: &str) -> Self {
        ExecState {
            program: program.chars().collect(),
            counter: 0,
            tape: Tape::new(),
            loop_frames: Vec::new(),
        }
    }

    /// Fetch the symbol under the program counter.
    ///
    /// Returns `Ok(None)` exactly when the counter sits at the end of the
    /// program, which is normal termination rather than a fault.
    pub fn current_instruction(&self) -> Result<Option<char>, Fault> {
        let len = self.program.len();
        if self.counter > len {
            return Err(Fault::ProgramCounter {
                counter: self.counter,
                len,
            });
        }
        Ok(self.program.get(self.counter).copied())
    }

    /// Move to the next instruction.
    ///
    /// Reaching the end of the program with loop frames still open is an
    /// [`Fault::UnterminatedLoop`].
    pub fn advance(&mut self) -> Result<(), Fault> {
        self.counter += 1;
        if self.counter == self.program.len() && !self.loop_frames.is_empty() {
            return Err(Fault::UnterminatedLoop {
                open_frames: self.loop_frames.len(),
            });
        }
        Ok(())
    }

    pub fn set_counter(&mut self, position: usize) {
        self.counter = position;
    }

    pub fn push_loop_frame(&mut self, frame: LoopFrame) {
        self.loop_frames.push(frame);
    }

    pub fn pop_loop_frame(&mut self) -> Option<LoopFrame> {
        self.loop_frames.pop()
    }

    /// Frame for a loop entered at the current counter and tape pointer
    pub fn snapshot_loop_frame(&self) -> LoopFrame {
        LoopFrame {
            open_pc: self.counter,
            cell: self.tape.pointer(),
        }
    }

    pub fn program(&self) -> &[char] {
        &self.program
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn tape_mut(&mut self) -> &mut Tape {
        &mut self.tape
    }

    /// Open loop frames, outermost first
    pub fn loop_frames(&self) -> &[LoopFrame] {
        &self.loop_frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_past_end_is_rejected() {
        let mut state = ExecState::new("+-");
        state.set_counter(3);
        assert_eq!(
            state.current_instruction(),
            Err(Fault::ProgramCounter { counter: 3, len: 2 })
        );
    }

    #[test]
    fn test_counter_at_end_is_end_of_program() {
        let mut state = ExecState::new("+-");
        state.set_counter(2);
        assert_eq!(state.current_instruction(), Ok(None));
    }

    #[test]
    fn test_clones_share_program_text() {
        let state = ExecState::new("+[-]");
        let copy = state.clone();
        assert!(Rc::ptr_eq(&state.program, &copy.program));
    }
}
