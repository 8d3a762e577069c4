//! Growable cell tape
//!
//! The tape starts as a single zero cell and only ever grows to the right.
//! Moving the pointer past the right end appends one zero cell; moving it
//! below index 0 is a fault rather than a wrap-around.
//!
//! Cells are `i64` and `+`/`-` wrap on overflow (two's complement).

use crate::interpreter::errors::Fault;

/// A single tape cell
pub type Cell = i64;

/// Memory tape with a movable pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<Cell>,
    pointer: usize,
}

impl Tape {
    pub fn new() -> Self {
        Tape {
            cells: vec![0],
            pointer: 0,
        }
    }

    /// Value of the cell under the pointer
    pub fn current_value(&self) -> Cell {
        self.cells[self.pointer]
    }

    /// Value of an arbitrary cell.
    ///
    /// Callers only pass indices that were once a live pointer position, and
    /// the tape never shrinks, so an out-of-range index is a bug and panics.
    pub fn value_at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn increment(&mut self) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_sub(1);
    }

    /// Advance the pointer, growing the tape by one zero cell if needed
    pub fn move_right(&mut self) {
        self.pointer += 1;
        if self.pointer == self.cells.len() {
            self.cells.push(0);
        }
    }

    /// Step the pointer back; the tape is left untouched on failure
    pub fn move_left(&mut self) -> Result<(), Fault> {
        match self.pointer.checked_sub(1) {
            Some(pointer) => {
                self.pointer = pointer;
                Ok(())
            }
            None => Err(Fault::TapeBounds),
        }
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a tape holds at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_single_zero_cell() {
        let tape = Tape::new();
        assert_eq!(tape.cells(), &[0]);
        assert_eq!(tape.pointer(), 0);
    }

    #[test]
    fn test_move_right_grows_by_one() {
        let mut tape = Tape::new();
        tape.move_right();
        tape.move_right();
        assert_eq!(tape.len(), 3);
        assert_eq!(tape.pointer(), 2);

        tape.move_left().unwrap();
        tape.move_right();
        assert_eq!(tape.len(), 3, "revisiting a cell must not append");
    }

    #[test]
    fn test_move_left_at_origin_faults() {
        let mut tape = Tape::new();
        tape.increment();
        assert!(matches!(tape.move_left(), Err(Fault::TapeBounds)));
        assert_eq!(tape.pointer(), 0);
        assert_eq!(tape.cells(), &[1]);
    }

    #[test]
    fn test_cells_wrap_on_overflow() {
        let mut tape = Tape::new();
        tape.decrement();
        assert_eq!(tape.current_value(), -1);

        let mut tape = Tape {
            cells: vec![Cell::MAX],
            pointer: 0,
        };
        tape.increment();
        assert_eq!(tape.current_value(), Cell::MIN);
    }

    #[test]
    fn test_value_at_reads_other_cells() {
        let mut tape = Tape::new();
        tape.increment();
        tape.move_right();
        assert_eq!(tape.current_value(), 0);
        assert_eq!(tape.value_at(0), 1);
    }
}
