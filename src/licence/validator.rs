//! Format checks for candidate identifiers.
//!
//! Validation is a pure predicate over the shape of a string. Day 31 in
//! February passes; only the ranges 01-31 and 01-12/51-62 are enforced.

use serde::Serialize;

use super::identifier::{Identifier, FEMALE_MONTH_OFFSET, IDENTIFIER_LEN, PAD, SURNAME_LEN};

/// The first rule a candidate breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "rule", content = "found", rename_all = "snake_case")]
pub enum Rejection {
    /// Not exactly sixteen characters after trimming.
    #[error("expected 16 characters, found {0}")]
    Length(usize),
    /// Positions 0-4 are not letters followed only by '9' padding.
    #[error("surname code must be letters A-Z, optionally right-padded with '9'")]
    SurnameCode,
    /// Positions 5-10 are not all digits.
    #[error("date of birth must be six digits")]
    NonDigitDate,
    /// Month code outside 01-12 and 51-62.
    #[error("month code {0:02} is outside 01-12 and 51-62")]
    MonthOutOfRange(u32),
    /// Day code outside 01-31.
    #[error("day code {0:02} is outside 01-31")]
    DayOutOfRange(u32),
    /// Position 11 is not a letter or digit.
    #[error("initial must be a letter A-Z or digit")]
    InitialCode,
    /// Positions 12-15 are not all letters or digits.
    #[error("filler must be four letters A-Z or digits")]
    FillerCode,
}

/// Outcome of checking one candidate, suitable for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// The candidate exactly as supplied.
    pub candidate: String,
    /// Whether the candidate is a well-formed identifier.
    pub valid: bool,
    /// Why it was rejected, when it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

/// Returns `true` when `candidate` is a well-formed identifier.
///
/// Leading and trailing whitespace is ignored and lowercase letters are
/// accepted.
#[must_use]
pub fn validate(candidate: &str) -> bool {
    inspect(candidate).is_ok()
}

/// Like [`validate`], for loosely typed input. Anything but a JSON string is
/// rejected.
#[must_use]
pub fn validate_value(candidate: &serde_json::Value) -> bool {
    candidate.as_str().is_some_and(validate)
}

/// Checks a candidate and keeps the reason for any rejection.
#[must_use]
pub fn check(candidate: &str) -> ValidationResult {
    let rejection = inspect(candidate).err();
    ValidationResult { candidate: candidate.to_string(), valid: rejection.is_none(), rejection }
}

/// Parses a candidate into an [`Identifier`].
///
/// # Errors
///
/// Returns the first [`Rejection`] rule the normalized candidate breaks,
/// checked left to right through the fields.
pub fn inspect(candidate: &str) -> Result<Identifier, Rejection> {
    let normalized = candidate.trim().to_uppercase();
    let chars: Vec<char> = normalized.chars().collect();

    if chars.len() != IDENTIFIER_LEN {
        return Err(Rejection::Length(chars.len()));
    }
    if !is_surname_code(&chars[..SURNAME_LEN]) {
        return Err(Rejection::SurnameCode);
    }
    if !chars[5..11].iter().all(char::is_ascii_digit) {
        return Err(Rejection::NonDigitDate);
    }

    let month = two_digits(chars[7], chars[8]);
    let is_month = (1..=12).contains(&month)
        || (1 + FEMALE_MONTH_OFFSET..=12 + FEMALE_MONTH_OFFSET).contains(&month);
    if !is_month {
        return Err(Rejection::MonthOutOfRange(month));
    }
    let day = two_digits(chars[9], chars[10]);
    if !(1..=31).contains(&day) {
        return Err(Rejection::DayOutOfRange(day));
    }

    if !is_alphanumeric(chars[11]) {
        return Err(Rejection::InitialCode);
    }
    if !chars[12..].iter().copied().all(is_alphanumeric) {
        return Err(Rejection::FillerCode);
    }

    Ok(Identifier::from_validated(normalized))
}

/// Letters first, then nothing but padding.
fn is_surname_code(field: &[char]) -> bool {
    let letters = field.iter().take_while(|c| c.is_ascii_uppercase()).count();
    field[letters..].iter().all(|&c| c == PAD)
}

fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

fn two_digits(tens: char, units: char) -> u32 {
    tens.to_digit(10).unwrap_or(0) * 10 + units.to_digit(10).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_canonical_example() {
        assert!(validate("SMITH900505S1234"));
    }

    #[test]
    fn accepts_padded_surnames() {
        assert!(validate("LI999900505A1234"));
        assert!(validate("99999900505A1234"));
    }

    #[test]
    fn rejects_letters_after_padding() {
        assert_eq!(inspect("L9I99900505A1234"), Err(Rejection::SurnameCode));
    }

    #[test]
    fn rejects_short_surname_that_shifts_offsets() {
        assert!(!validate("SMIT900505S1234"));
        assert_eq!(inspect("SMIT900505S1234"), Err(Rejection::Length(15)));
        assert_eq!(inspect("SMIT900505S12345"), Err(Rejection::NonDigitDate));
    }

    #[test]
    fn rejects_month_outside_both_ranges() {
        assert_eq!(inspect("SMITH900585S1234"), Err(Rejection::MonthOutOfRange(85)));
        assert_eq!(inspect("SMITH900005S1234"), Err(Rejection::MonthOutOfRange(0)));
        assert_eq!(inspect("SMITH901305S1234"), Err(Rejection::MonthOutOfRange(13)));
        assert_eq!(inspect("SMITH905005S1234"), Err(Rejection::MonthOutOfRange(50)));
        assert_eq!(inspect("SMITH906305S1234"), Err(Rejection::MonthOutOfRange(63)));
        assert!(validate("SMITH905105S1234"));
        assert!(validate("SMITH906205S1234"));
    }

    #[test]
    fn day_range_ignores_the_calendar() {
        assert!(validate("SMITH900231S1234"));
        assert_eq!(inspect("SMITH900200S1234"), Err(Rejection::DayOutOfRange(0)));
        assert_eq!(inspect("SMITH900232S1234"), Err(Rejection::DayOutOfRange(32)));
    }

    #[test]
    fn rejects_bad_initial_and_filler() {
        assert_eq!(inspect("SMITH900505-1234"), Err(Rejection::InitialCode));
        assert_eq!(inspect("SMITH900505S12_4"), Err(Rejection::FillerCode));
        assert!(validate("SMITH9005059ZZZZ"));
    }

    #[test]
    fn normalizes_before_checking() {
        assert!(validate("  smith900505s1234\n"));
        assert!(!validate(""));
        assert!(!validate("SMITH 900505S1234"));
    }

    #[test]
    fn non_ascii_input_is_rejected_without_panicking() {
        assert!(!validate("SMÏTH900505S1234"));
        assert!(!validate("SMITH900505S12Ä4"));
    }

    #[test]
    fn non_string_values_are_rejected() {
        assert!(!validate_value(&json!(12345)));
        assert!(!validate_value(&json!(null)));
        assert!(!validate_value(&json!(["SMITH900505S1234"])));
        assert!(validate_value(&json!("SMITH900505S1234")));
    }

    #[test]
    fn repeated_validation_is_stable() {
        let candidate = "SMITH900505S1234";
        let first = validate(candidate);
        for _ in 0..10 {
            assert_eq!(validate(candidate), first);
        }
    }

    #[test]
    fn check_reports_reason() {
        let result = check("SMITH900585S1234");
        assert!(!result.valid);
        assert_eq!(result.rejection, Some(Rejection::MonthOutOfRange(85)));
        assert_eq!(
            result.rejection.unwrap().to_string(),
            "month code 85 is outside 01-12 and 51-62"
        );

        let json = serde_json::to_value(check("SMITH900505S1234")).unwrap();
        assert_eq!(json, json!({"candidate": "SMITH900505S1234", "valid": true}));
    }
}
