//! Fictional UK driving-licence style identifiers.
//!
//! An identifier is sixteen characters from `[A-Z0-9]` laid out as fixed
//! positional fields:
//!
//! ```text
//! SMITH 90 55 05 S 1AB2
//! │     │  │  │  │ └─ filler (random)
//! │     │  │  │  └─── first initial, or '9'
//! │     │  │  └────── day of birth
//! │     │  └───────── month of birth, +50 when female
//! │     └──────────── last two digits of the birth year
//! └────────────────── surname, letters only, '9'-padded
//! ```
//!
//! Nothing here is a real DVLA algorithm: there is no check digit, and the
//! validator checks shape, not calendar correctness.

pub mod batch;
pub mod encoder;
pub mod identifier;
pub mod person;
pub mod random;
pub mod validator;

pub use batch::{batch, clamp_count, generate_batch, Batch, BatchMode};
pub use encoder::{
    encode, encode_detailed, encode_person, encode_strict, DobSource, EncodeError, Encoding,
};
pub use identifier::Identifier;
pub use person::{Gender, PersonInput};
pub use random::{generate_random, random_person};
pub use validator::{check, inspect, validate, validate_value, Rejection, ValidationResult};
