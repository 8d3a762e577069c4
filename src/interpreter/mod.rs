//! Interpreter execution engine
//!
//! This module provides the core execution logic:
//! - [`state`]: program counter, tape ownership and the loop-frame stack
//! - [`instruction`]: the closed instruction set and its handlers
//! - [`engine`]: the dispatch loop and the run controller
//! - [`debug`]: the post-run debug dump
//! - [`errors`]: faults and run outcomes
//! - [`history`]: time-travel navigation over recorded snapshots
//!
//! # Execution Model
//!
//! The engine fetches the symbol under the program counter, decodes it and
//! runs its handler until the counter reaches the end of the program or a
//! handler faults. With history enabled, a snapshot is taken before every
//! instruction.

pub mod constants;
pub mod debug;
pub mod engine;
pub mod errors;
pub mod history;
pub mod instruction;
pub mod state;
