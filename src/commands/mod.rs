//! Command dispatch and handlers.

pub mod batch;
pub mod encode;
pub mod person;
pub mod random;
pub mod validate;

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// When `DLNUM_RECORD` is set, every random draw and clock read is written
/// to that cassette file once the command finishes; `DLNUM_REPLAY` serves
/// them back from one.
///
/// # Errors
///
/// Returns an error string if the context cannot be built, the handler
/// fails, or the cassette cannot be written.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), String> {
    let ctx = config.context()?;
    let result = dispatch_with_context(command, config, &ctx);

    // Write the cassette even when the command failed.
    if let Some(path) = ctx.finish()? {
        eprintln!("Recording saved to: {}", path.display());
    }

    result
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    config: &Config,
    ctx: &ServiceContext,
) -> Result<(), String> {
    match command {
        Command::Encode { first, last, gender, dob, strict, json } => {
            let request = encode::EncodeRequest {
                first: first.as_str(),
                last: last.as_str(),
                gender: gender.as_str(),
                dob: dob.as_str(),
                strict: *strict,
            };
            encode::run(ctx, &request, *json)
        }
        Command::Validate { candidates, explain, json } => {
            validate::run(candidates, *explain, *json)
        }
        Command::Random { json } => random::run(ctx, *json),
        Command::Batch { count, mode, json } => {
            let count = count.unwrap_or_else(|| i64::try_from(config.batch_count).unwrap_or(1));
            batch::run(ctx, count, (*mode).into(), *json)
        }
        Command::Person { json } => person::run(ctx, *json),
    }
}

/// Serializes command output as pretty JSON.
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize output: {e}"))
}
