//! `dlnum person` command.

use crate::context::ServiceContext;
use crate::licence::{random_person, PersonInput};

/// Execute the `person` command.
///
/// The text form is a ready-made argument list for `dlnum encode`.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn run(ctx: &ServiceContext, json: bool) -> Result<(), String> {
    let person = random_person(ctx);
    if json {
        println!("{}", super::to_json(&person)?);
    } else {
        println!("{}", as_encode_args(&person));
    }
    Ok(())
}

/// Formats a person as `encode` flags. Generated names never contain spaces.
#[must_use]
pub fn as_encode_args(person: &PersonInput) -> String {
    format!(
        "--first {} --last {} --gender {} --dob {}",
        person.first_name,
        person.last_name,
        person.gender.code(),
        person.date_of_birth
    )
}
