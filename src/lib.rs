//! # Introduction
//!
//! brainf runs programs for a small tape machine: seven single-character
//! instructions that move a pointer over a growable tape of integer cells,
//! change cells, print characters and loop. A run ends with a debug dump of
//! the program counter and tape. Execution history can be recorded and
//! stepped through, forward and backward, in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! File → normalize → ExecState → dispatch loop → Outcome → debug dump
//!                                      ↓
//!                                  Snapshots → TUI
//! ```
//!
//! 1. [`program`] — reads a file and strips line breaks and spaces.
//! 2. [`interpreter`] — execution state, instruction handlers, the dispatch
//!    loop and the debug dump.
//! 3. [`memory`] — the [`memory::tape::Tape`] of `i64` cells.
//! 4. [`snapshot`] — snapshot history with a memory limit and a
//!    [`snapshot::Console`] that records output.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Instruction set
//!
//! `+` `-` change the current cell, `<` `>` move the pointer, `.` prints the
//! current cell as a character, `[` and `]` loop. A loop repeats while the
//! cell that was current when its `[` executed is non-zero, wherever the
//! pointer has moved since.

pub mod interpreter;
pub mod memory;
pub mod program;
pub mod snapshot;
pub mod ui;
