//! Command dispatch

use std::io;

use tracing::{debug, instrument};

use crate::application::write_report;
use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::domain::{builtin_profile, default_profiles};

#[instrument(skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let profiles = match cli.audience {
        Some(audience) => {
            debug!("single audience requested: {:?}", audience);
            vec![builtin_profile(audience.into())]
        }
        None => default_profiles(),
    };

    let stdout = io::stdout();
    write_report(&profiles, &mut stdout.lock())?;
    Ok(())
}
