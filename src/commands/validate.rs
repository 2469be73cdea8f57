//! `dlnum validate` command.

use crate::licence::{check, ValidationResult};

/// Execute the `validate` command.
///
/// Prints one verdict per candidate.
///
/// # Errors
///
/// Returns an error string naming how many candidates were rejected, so the
/// process exits non-zero when any fail.
pub fn run(candidates: &[String], explain: bool, json: bool) -> Result<(), String> {
    let results: Vec<ValidationResult> = candidates.iter().map(|c| check(c)).collect();
    println!("{}", render(&results, explain, json)?);

    let rejected = results.iter().filter(|r| !r.valid).count();
    if rejected == 0 {
        Ok(())
    } else {
        Err(format!("{rejected} of {} candidate(s) rejected", results.len()))
    }
}

/// Format verdicts as text lines or a JSON array.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn render(results: &[ValidationResult], explain: bool, json: bool) -> Result<String, String> {
    if json {
        return super::to_json(&results);
    }
    let width = results.iter().map(|r| r.candidate.chars().count()).max().unwrap_or(0);
    let lines: Vec<String> = results
        .iter()
        .map(|result| {
            let verdict = match (&result.rejection, explain) {
                (None, _) => "valid".to_string(),
                (Some(rejection), true) => format!("invalid: {rejection}"),
                (Some(_), false) => "invalid".to_string(),
            };
            format!("{:<width$}  {verdict}", result.candidate)
        })
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(candidates: &[&str]) -> Vec<ValidationResult> {
        candidates.iter().map(|c| check(c)).collect()
    }

    #[test]
    fn renders_aligned_verdicts() {
        let out = render(&results(&["SMITH900505S1234", "SMIT900505S1234"]), false, false).unwrap();
        assert_eq!(out, "SMITH900505S1234  valid\nSMIT900505S1234   invalid");
    }

    #[test]
    fn aligns_non_ascii_candidates_by_character() {
        let out = render(&results(&["ÉÉÉ", "AB"]), false, false).unwrap();
        assert_eq!(out, "ÉÉÉ  invalid\nAB   invalid");
    }

    #[test]
    fn explain_adds_reason() {
        let out = render(&results(&["SMITH900585S1234"]), true, false).unwrap();
        assert_eq!(out, "SMITH900585S1234  invalid: month code 85 is outside 01-12 and 51-62");
    }

    #[test]
    fn json_lists_every_candidate() {
        let out = render(&results(&["SMITH900505S1234", "nope"]), false, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["valid"], true);
        assert_eq!(value[1]["rejection"]["rule"], "length");
        assert_eq!(value[1]["rejection"]["found"], 4);
    }

    #[test]
    fn run_fails_when_any_candidate_is_rejected() {
        assert!(run(&["SMITH900505S1234".to_string()], false, false).is_ok());
        let err = run(&["SMITH900505S1234".to_string(), "bad".to_string()], false, false)
            .unwrap_err();
        assert_eq!(err, "1 of 2 candidate(s) rejected");
    }
}
