//! `dlnum encode` command.

use crate::context::ServiceContext;
use crate::licence::{encode_detailed, encode_strict, DobSource, Encoding};

/// Raw field values from the command line.
#[derive(Debug, Clone, Copy)]
pub struct EncodeRequest<'a> {
    /// First name.
    pub first: &'a str,
    /// Surname.
    pub last: &'a str,
    /// Gender field.
    pub gender: &'a str,
    /// Date of birth text.
    pub dob: &'a str,
    /// Refuse to substitute a fallback date.
    pub strict: bool,
}

/// Execute the `encode` command.
///
/// # Errors
///
/// Returns an error string if a field is blank, or if `strict` is set and the
/// date of birth does not parse.
pub fn run(ctx: &ServiceContext, request: &EncodeRequest<'_>, json: bool) -> Result<(), String> {
    println!("{}", render(ctx, request, json)?);
    Ok(())
}

/// Produce the `encode` output without printing it.
///
/// # Errors
///
/// See [`run`].
pub fn render(
    ctx: &ServiceContext,
    request: &EncodeRequest<'_>,
    json: bool,
) -> Result<String, String> {
    let fields = [request.first, request.last, request.gender, request.dob];
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err("Please fill in all fields (--first, --last, --gender, --dob).".to_string());
    }
    let (first, last, gender, dob) = (
        request.first.trim(),
        request.last.trim(),
        request.gender.trim(),
        request.dob.trim(),
    );

    let encoding = if request.strict {
        let identifier =
            encode_strict(ctx, first, last, gender, dob).map_err(|e| e.to_string())?;
        Encoding { identifier, dob_source: DobSource::Parsed }
    } else {
        encode_detailed(ctx, first, last, gender, dob)
    };

    if json {
        super::to_json(&encoding)
    } else {
        Ok(encoding.identifier.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn ctx() -> ServiceContext {
        let now = DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z").unwrap().with_timezone(&Utc);
        ServiceContext::scripted(vec![0], now)
    }

    fn request<'a>(dob: &'a str, strict: bool) -> EncodeRequest<'a> {
        EncodeRequest { first: " Sam ", last: "Smith", gender: "F", dob, strict }
    }

    #[test]
    fn renders_identifier_text() {
        let out = render(&ctx(), &request("1990-05-05", false), false).unwrap();
        assert_eq!(out, "SMITH905505SAAAA");
    }

    #[test]
    fn renders_json_with_dob_source() {
        let out = render(&ctx(), &request("nonsense", false), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["dob_source"], "fallback");
        assert_eq!(value["identifier"].as_str().unwrap().len(), 16);
    }

    #[test]
    fn strict_rejects_unparseable_dates() {
        let err = render(&ctx(), &request("nonsense", true), false).unwrap_err();
        assert!(err.contains("not a recognised date"));
    }

    #[test]
    fn blank_fields_are_refused() {
        let blank = EncodeRequest { first: "  ", ..request("1990-05-05", false) };
        assert!(render(&ctx(), &blank, false).unwrap_err().contains("fill in all fields"));
    }
}
