//! Stable exit codes for solver CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to missing/malformed input, invalid config, or any
/// other propagated error.
pub const INVALID: i32 = 1;
/// `solver run --day N` named a day outside the catalogue.
pub const UNKNOWN_DAY: i32 = 2;
