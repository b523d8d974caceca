//! Exit code constants for the obsgrade CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input)
//! - 2: Validation failure (`score --strict` found penalized lines)
//! - 3: Configuration error (bad YAML, unknown rule, invalid regex)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or input that could not be read.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a strict scoring run found penalized observations.
pub const VALIDATION_FAILURE: i32 = 2;

/// Configuration error: the config or passage file could not be used.
pub const CONFIG_ERROR: i32 = 3;
