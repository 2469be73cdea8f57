//! `dlnum random` command.

use crate::context::ServiceContext;
use crate::licence::generate_random;

/// Execute the `random` command.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn run(ctx: &ServiceContext, json: bool) -> Result<(), String> {
    let identifier = generate_random(ctx);
    if json {
        println!("{}", super::to_json(&identifier)?);
    } else {
        println!("{identifier}");
    }
    Ok(())
}
