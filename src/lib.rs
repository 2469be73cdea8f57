//! Core library entry for the `dlnum` CLI.
//!
//! Generates fictional UK driving-licence style identifiers from personal
//! details or pure randomness, and checks strings against the same format.
//! The generation operations live in [`licence`]; [`ServiceContext`]
//! supplies their randomness and clock.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod licence;
pub mod ports;

use clap::error::ErrorKind;
use clap::Parser;

pub use context::ServiceContext;
pub use licence::{
    batch, encode, encode_detailed, encode_strict, generate_batch, generate_random, inspect,
    random_person, validate, validate_value, BatchMode, Identifier, Rejection,
};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, configuration is
/// invalid, or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    let config = config::Config::from_env().map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command, &config)
}
