//! Timed per-day puzzle solver catalogue.
//!
//! Each day module parses its own input document once at construction and
//! answers two pure queries (`part1`, `part2`). A harness runs the catalogue
//! in order, times each part, and persists one tabular row per day. The
//! architecture keeps a strict separation:
//!
//! - **[`days`] / [`machine`] / [`harness`]**: deterministic logic. No I/O,
//!   fully testable in isolation.
//! - **[`io`]**: side-effecting operations (input files, config, run log).
//!
//! The binary is a thin clap shell over the two halves.

pub mod days;
pub mod exit_codes;
pub mod harness;
pub mod io;
pub mod logging;
pub mod machine;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
