//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;

pub use args::{AudienceArg, Cli};
pub use error::{CliError, CliResult};
