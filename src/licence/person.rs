//! Personal attributes an identifier is derived from.

use serde::{Deserialize, Serialize};

/// Gender as far as the month encoding cares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// `M`; month unchanged.
    Male,
    /// `F`; month offset by 50.
    Female,
    /// Anything else, including empty. Month unchanged.
    #[default]
    Unspecified,
}

impl Gender {
    /// Reads a gender field. Only `F` (any case) is female and only `M` is
    /// male; every other value is unspecified. Surrounding whitespace is not
    /// stripped, so `" F"` is unspecified.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "F" | "f" => Self::Female,
            "M" | "m" => Self::Male,
            _ => Self::Unspecified,
        }
    }

    /// Single-letter form, empty when unspecified.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Unspecified => "",
        }
    }

    /// Whether the month field gets the female offset.
    #[must_use]
    pub fn is_female(self) -> bool {
        self == Self::Female
    }
}

/// One person's raw attributes, exactly as a caller supplied them.
///
/// The date of birth stays as text: the encoder decides what to do when it
/// does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    /// Given name; only its first character is used.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Gender field.
    pub gender: Gender,
    /// Date of birth text.
    pub date_of_birth: String,
}

impl PersonInput {
    /// Builds an input from raw field values.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            date_of_birth: date_of_birth.into(),
        }
    }
}
