pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod scanner;

pub use error::{GuardError, Result};

/// No error findings.
pub const EXIT_SUCCESS: i32 = 0;
/// At least one finding in the error channel.
pub const EXIT_ERRORS_FOUND: i32 = 1;
/// Rules or Dockerfile failed to load; no report was produced.
pub const EXIT_LOAD_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
