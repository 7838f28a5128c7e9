//! Core library entry for the `varclock` CLI.
//!
//! A clock that splits daylight (sunrise to sunset) and night into twelve
//! variable-length hours each. Location comes from a [`ports::Geolocator`],
//! the day boundary from a [`ports::SunTimeProvider`], and a ticker driven
//! by a [`ports::Clock`] renders a frame once per second.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod face;
pub mod ports;
pub mod session;

use clap::error::ErrorKind;
use clap::Parser;

pub use error::ClockError;

/// Run the CLI with the provided arguments.
///
/// Help and version requests are printed and count as success.
///
/// # Errors
///
/// Returns [`ClockError::Usage`] when argument parsing fails, or the command's
/// own error when execution fails.
pub fn run<I, T>(args: I) -> Result<(), ClockError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                return Ok(());
            }
            _ => return Err(ClockError::Usage(err.to_string())),
        },
    };
    commands::dispatch(&cli.command)
}
