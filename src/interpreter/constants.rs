// Constants for the interpreter

/// Default memory budget for execution history (256 MiB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 256 * 1024 * 1024;

/// Opening line of the debug dump
pub const DEBUG_HEADER: &str = "============= DEBUG =============";

/// Closing line of the debug dump
pub const DEBUG_FOOTER: &str = "==================================";
