//! CLI-level errors
//!
//! These are what get displayed to the user.

use thiserror::Error;

use crate::exitcode;

/// Runtime failures surfaced to the user. Argument errors never reach this
/// type; clap rejects them at parse time.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => exitcode::IOERR,
        }
    }
}
