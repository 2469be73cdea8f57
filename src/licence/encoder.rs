//! Derives an identifier from a person's attributes.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use super::identifier::{
    Identifier, ALPHANUMERIC, FEMALE_MONTH_OFFSET, IDENTIFIER_LEN, PAD, SURNAME_LEN,
};
use super::person::{Gender, PersonInput};
use crate::context::ServiceContext;
use crate::ports::random::{between, pick, RandomSource};

/// Accepted date-of-birth layouts, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// Bounds of the synthetic date used when a date of birth does not parse.
const FALLBACK_YEARS: (u32, u32) = (1950, 2005);
const FALLBACK_MAX_DAY: u32 = 28;

/// Where the encoded date of birth came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DobSource {
    /// The caller's date parsed.
    Parsed,
    /// The caller's date did not parse and a random one was substituted.
    Fallback,
}

/// An identifier plus how its date of birth was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoding {
    /// The generated identifier.
    pub identifier: Identifier,
    /// Whether the date of birth was parsed or synthesized.
    pub dob_source: DobSource,
}

/// Raised only by [`encode_strict`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The date of birth matched none of the accepted layouts.
    #[error("date of birth {0:?} is not a recognised date")]
    InvalidDateOfBirth(String),
}

/// Calendar fields of a birth date, as encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BirthDate {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month(), day: date.day() }
    }
}

/// Encodes a person into an identifier.
///
/// Never fails: a short surname is padded, a missing initial becomes `'9'`,
/// and an unparseable date of birth is replaced by a random one.
pub fn encode(
    ctx: &ServiceContext,
    first_name: &str,
    last_name: &str,
    gender: &str,
    dob_input: &str,
) -> Identifier {
    encode_detailed(ctx, first_name, last_name, gender, dob_input).identifier
}

/// Like [`encode`], but also reports whether the fallback date was used.
pub fn encode_detailed(
    ctx: &ServiceContext,
    first_name: &str,
    last_name: &str,
    gender: &str,
    dob_input: &str,
) -> Encoding {
    let random = ctx.random.as_ref();
    let (dob, dob_source) = match parse_date_of_birth(dob_input) {
        Some(date) => (BirthDate::from(date), DobSource::Parsed),
        None => {
            warn!(dob = dob_input, "unparseable date of birth, substituting a random one");
            (fallback_date(random), DobSource::Fallback)
        }
    };

    let identifier =
        assemble(first_name, last_name, Gender::parse(gender).is_female(), dob, random);
    debug!(%identifier, ?dob_source, "encoded identifier");
    Encoding { identifier, dob_source }
}

/// Like [`encode`], but refuses to invent a date of birth.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidDateOfBirth`] when `dob_input` does not parse.
pub fn encode_strict(
    ctx: &ServiceContext,
    first_name: &str,
    last_name: &str,
    gender: &str,
    dob_input: &str,
) -> Result<Identifier, EncodeError> {
    let date = parse_date_of_birth(dob_input)
        .ok_or_else(|| EncodeError::InvalidDateOfBirth(dob_input.to_string()))?;
    Ok(assemble(
        first_name,
        last_name,
        Gender::parse(gender).is_female(),
        date.into(),
        ctx.random.as_ref(),
    ))
}

/// Encodes a [`PersonInput`].
pub fn encode_person(ctx: &ServiceContext, person: &PersonInput) -> Encoding {
    encode_detailed(
        ctx,
        &person.first_name,
        &person.last_name,
        person.gender.code(),
        &person.date_of_birth,
    )
}

fn assemble(
    first_name: &str,
    last_name: &str,
    female: bool,
    dob: BirthDate,
    random: &dyn RandomSource,
) -> Identifier {
    let mut code = surname_code(last_name);
    code.push_str(&date_code(dob, female));
    code.push(initial_code(first_name));
    push_filler(&mut code, random);
    Identifier::from_generated(code)
}

/// Uppercased A-Z letters of the surname, padded with `'9'` and cut to five.
pub(crate) fn surname_code(last_name: &str) -> String {
    last_name
        .to_uppercase()
        .chars()
        .filter(char::is_ascii_uppercase)
        .chain(std::iter::repeat(PAD))
        .take(SURNAME_LEN)
        .collect()
}

/// `YYMMDD`, with 50 added to the month for female holders.
pub(crate) fn date_code(dob: BirthDate, female: bool) -> String {
    let month = if female { dob.month + FEMALE_MONTH_OFFSET } else { dob.month };
    format!("{:02}{month:02}{:02}", dob.year.rem_euclid(100), dob.day)
}

/// First character of the first name, uppercased, if it is A-Z or 0-9.
pub(crate) fn initial_code(first_name: &str) -> char {
    first_name
        .trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .unwrap_or(PAD)
}

/// Appends random alphanumerics until the identifier is full length.
pub(crate) fn push_filler(code: &mut String, random: &dyn RandomSource) {
    let remaining = IDENTIFIER_LEN.saturating_sub(code.len());
    code.extend((0..remaining).map(|_| char::from(*pick(random, ALPHANUMERIC))));
}

/// A uniformly random date between 1950 and 2005, days capped at 28.
pub(crate) fn fallback_date(random: &dyn RandomSource) -> BirthDate {
    let year = between(random, FALLBACK_YEARS.0, FALLBACK_YEARS.1);
    let month = between(random, 1, 12);
    let day = between(random, 1, FALLBACK_MAX_DAY);
    BirthDate { year: i32::try_from(year).unwrap_or_default(), month, day }
}

/// Parses the accepted layouts, or the date part of an RFC 3339 timestamp.
///
/// Slash, dash and dot layouts that lead with a two-digit field are read
/// day first, so `05/06/1990` is 5 June 1990.
pub(crate) fn parse_date_of_birth(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()))
}
