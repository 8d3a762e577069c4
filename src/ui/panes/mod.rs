//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`program`]: Program text with the current instruction and open loops marked
//! - [`tape`]: Tape cells with the pointer and loop test cells marked
//! - [`loops`]: Open loop frames, innermost first
//! - [`output`]: Text written by `.`
//! - [`status`]: Status bar with keybindings and execution state
//! - `utils`: Shared block, scrolling and cell formatting helpers
//!
//! Each pane module exports one `render_*` function that takes the frame, its
//! area, the data to show and the pane's scroll offset.

mod utils;

pub mod loops;
pub mod output;
pub mod program;
pub mod status;
pub mod tape;

pub use loops::render_loops_pane;
pub use output::render_output_pane;
pub use program::render_program_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use tape::render_tape_pane;
