//! Instruction set and handlers
//!
//! The instruction set is closed, so dispatch is a `match` over
//! [`Instruction`] rather than a lookup table.
//!
//! # Loop protocol
//!
//! `[` always enters its body and pushes a [`LoopFrame`] recording its own
//! position and the current tape pointer. `]` pops that frame and tests the
//! cell the frame recorded, not the cell under the live pointer. On a non-zero
//! test the frame goes back on the stack and the counter is set to the `[`;
//! the unconditional advance that follows lands on the first instruction of
//! the body. On zero the advance simply falls through past `]`.

use crate::interpreter::errors::Fault;
use crate::interpreter::state::ExecState;
use std::io::Write;

/// One decoded instruction symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `+`
    Increment,
    /// `-`
    Decrement,
    /// `.`
    Output,
    /// `<`
    MoveLeft,
    /// `>`
    MoveRight,
    /// `[`
    LoopOpen,
    /// `]`
    LoopClose,
}

impl Instruction {
    /// Decode a symbol, or `None` if it has no handler
    pub fn decode(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '.' => Some(Instruction::Output),
            '<' => Some(Instruction::MoveLeft),
            '>' => Some(Instruction::MoveRight),
            '[' => Some(Instruction::LoopOpen),
            ']' => Some(Instruction::LoopClose),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Output => '.',
            Instruction::MoveLeft => '<',
            Instruction::MoveRight => '>',
            Instruction::LoopOpen => '[',
            Instruction::LoopClose => ']',
        }
    }

    /// Run this instruction against `state`, writing any output to `out`
    pub fn execute<W: Write + ?Sized>(
        self,
        state: &mut ExecState,
        out: &mut W,
    ) -> Result<(), Fault> {
        match self {
            Instruction::Increment => state.tape_mut().increment(),
            Instruction::Decrement => state.tape_mut().decrement(),
            Instruction::Output => emit(state, out)?,
            Instruction::MoveLeft => state.tape_mut().move_left()?,
            Instruction::MoveRight => state.tape_mut().move_right(),
            Instruction::LoopOpen => {
                let frame = state.snapshot_loop_frame();
                state.push_loop_frame(frame);
            }
            Instruction::LoopClose => {
                let frame = state.pop_loop_frame().ok_or(Fault::InvalidLoop {
                    position: state.counter(),
                })?;

                if state.tape().value_at(frame.cell) != 0 {
                    state.push_loop_frame(frame);
                    state.set_counter(frame.open_pc);
                }
            }
        }

        state.advance()
    }
}

/// Write the current cell as one character and flush immediately
fn emit<W: Write + ?Sized>(state: &ExecState, out: &mut W) -> Result<(), Fault> {
    let value = state.tape().current_value();
    let ch = u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or(Fault::InvalidCharacter {
            value,
            position: state.counter(),
        })?;

    let mut buf = [0u8; 4];
    out.write_all(ch.encode_utf8(&mut buf).as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| Fault::Output {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_symbols() {
        for symbol in "+-.<>[]".chars() {
            let instruction = Instruction::decode(symbol).expect("known symbol");
            assert_eq!(instruction.symbol(), symbol);
        }
    }

    #[test]
    fn test_decode_rejects_input_and_whitespace() {
        assert_eq!(Instruction::decode(','), None);
        assert_eq!(Instruction::decode('\t'), None);
        assert_eq!(Instruction::decode('a'), None);
    }

    #[test]
    fn test_loop_open_snapshots_pointer() {
        let mut state = ExecState::new(">[]");
        let mut out = Vec::new();
        Instruction::MoveRight.execute(&mut state, &mut out).unwrap();
        Instruction::LoopOpen.execute(&mut state, &mut out).unwrap();

        let frame = state.loop_frames()[0];
        assert_eq!(frame.open_pc, 1);
        assert_eq!(frame.cell, 1);
        assert_eq!(state.counter(), 2);
    }

    #[test]
    fn test_loop_close_jumps_past_open() {
        let mut state = ExecState::new("+[+]");
        let mut out = Vec::new();
        Instruction::Increment.execute(&mut state, &mut out).unwrap();
        Instruction::LoopOpen.execute(&mut state, &mut out).unwrap();
        Instruction::Increment.execute(&mut state, &mut out).unwrap();
        Instruction::LoopClose.execute(&mut state, &mut out).unwrap();

        // Cell 0 is non-zero: the frame is kept and the body restarts
        assert_eq!(state.counter(), 2);
        assert_eq!(state.loop_frames().len(), 1);
    }

    #[test]
    fn test_output_rejects_negative_cell() {
        let mut state = ExecState::new("-.");
        let mut out = Vec::new();
        Instruction::Decrement.execute(&mut state, &mut out).unwrap();
        let err = Instruction::Output.execute(&mut state, &mut out).unwrap_err();
        assert_eq!(
            err,
            Fault::InvalidCharacter {
                value: -1,
                position: 1
            }
        );
        assert!(out.is_empty());
    }
}
