//! The `Identifier` value type and its field layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validator::{self, Rejection};

/// Total length of every identifier.
pub const IDENTIFIER_LEN: usize = 16;
/// Length of the surname field.
pub const SURNAME_LEN: usize = 5;
/// Added to the birth month when the holder is female.
pub const FEMALE_MONTH_OFFSET: u32 = 50;
/// Character used to pad short surnames and stand in for a missing initial.
pub const PAD: char = '9';

pub(crate) const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(crate) const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A well-formed 16-character identifier.
///
/// Values can only be built by the generators in this module or by parsing a
/// string that passes [`validator::inspect`], so the field accessors never
/// see malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Wraps a string produced by one of the generators.
    pub(crate) fn from_generated(code: String) -> Self {
        debug_assert!(validator::inspect(&code).is_ok(), "generated malformed identifier {code}");
        Self(code)
    }

    /// Wraps a normalized string that has already passed every format rule.
    pub(super) fn from_validated(normalized: String) -> Self {
        Self(normalized)
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Positions 0-4.
    #[must_use]
    pub fn surname_code(&self) -> &str {
        &self.0[0..5]
    }

    /// Positions 5-6.
    #[must_use]
    pub fn year_code(&self) -> &str {
        &self.0[5..7]
    }

    /// Positions 7-8, including any female offset.
    #[must_use]
    pub fn month_code(&self) -> &str {
        &self.0[7..9]
    }

    /// Positions 9-10.
    #[must_use]
    pub fn day_code(&self) -> &str {
        &self.0[9..11]
    }

    /// Position 11.
    #[must_use]
    pub fn initial_code(&self) -> char {
        char::from(self.0.as_bytes()[11])
    }

    /// Positions 12-15.
    #[must_use]
    pub fn filler_code(&self) -> &str {
        &self.0[12..16]
    }

    /// Whether the month field carries the female offset.
    #[must_use]
    pub fn is_female_encoding(&self) -> bool {
        self.month_number() > FEMALE_MONTH_OFFSET
    }

    /// Birth month with the female offset removed.
    #[must_use]
    pub fn birth_month(&self) -> u32 {
        let month = self.month_number();
        if month > FEMALE_MONTH_OFFSET {
            month - FEMALE_MONTH_OFFSET
        } else {
            month
        }
    }

    fn month_number(&self) -> u32 {
        self.month_code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validator::inspect(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = Rejection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_positional_fields() {
        let id: Identifier = "SMITH905505S1A2B".parse().unwrap();
        assert_eq!(id.surname_code(), "SMITH");
        assert_eq!(id.year_code(), "90");
        assert_eq!(id.month_code(), "55");
        assert_eq!(id.day_code(), "05");
        assert_eq!(id.initial_code(), 'S');
        assert_eq!(id.filler_code(), "1A2B");
        assert!(id.is_female_encoding());
        assert_eq!(id.birth_month(), 5);
    }

    #[test]
    fn male_month_is_unchanged() {
        let id: Identifier = "SMITH900505S1234".parse().unwrap();
        assert!(!id.is_female_encoding());
        assert_eq!(id.birth_month(), 5);
    }

    #[test]
    fn parsing_normalizes_case_and_whitespace() {
        let id: Identifier = "  smith900505s1234 ".parse().unwrap();
        assert_eq!(id.as_str(), "SMITH900505S1234");
    }

    #[test]
    fn parsing_rejects_malformed_input() {
        assert_eq!("SMITH900585S1234".parse::<Identifier>(), Err(Rejection::MonthOutOfRange(85)));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id: Identifier = "LI999900505A0000".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"LI999900505A0000\"");
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<Identifier>("\"SHORT\"").is_err());
    }
}
