//! Memory model for the interpreter
//!
//! - [`tape`]: the growable cell tape and its pointer
//!
//! # Cell Width
//!
//! Cells are signed 64-bit integers. `+` and `-` wrap on overflow, so a
//! program can count below zero and past `i64::MAX` without faulting.

pub mod tape;
