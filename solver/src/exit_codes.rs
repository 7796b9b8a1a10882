//! Stable exit codes for solver CLI commands.

/// All requested answers were printed.
pub const OK: i32 = 0;
/// Malformed input, unknown day, or any other error.
pub const INVALID: i32 = 1;
/// `solver run` found no input file for the requested day.
pub const MISSING_INPUT: i32 = 2;
