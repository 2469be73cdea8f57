//! `dlnum batch` command.

use crate::context::ServiceContext;
use crate::licence::{batch, BatchMode, Identifier};

/// Execute the `batch` command.
///
/// Prints one identifier per line, or a JSON array. The count is clamped to
/// 1-500 rather than rejected.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn run(ctx: &ServiceContext, count: i64, mode: BatchMode, json: bool) -> Result<(), String> {
    println!("{}", render(ctx, count, mode, json)?);
    Ok(())
}

/// Produce the `batch` output without printing it.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn render(
    ctx: &ServiceContext,
    count: i64,
    mode: BatchMode,
    json: bool,
) -> Result<String, String> {
    let ids: Vec<Identifier> = batch(ctx, count, mode).collect();
    if json {
        return super::to_json(&ids);
    }
    Ok(ids.iter().map(Identifier::as_str).collect::<Vec<_>>().join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_output_has_one_line_per_identifier() {
        let out = render(&ServiceContext::live(), 12, BatchMode::Random, false).unwrap();
        assert_eq!(out.lines().count(), 12);
        assert!(out.lines().all(|line| line.len() == 16));
    }

    #[test]
    fn json_output_is_an_array() {
        let out = render(&ServiceContext::live(), 3, BatchMode::Encoded, true).unwrap();
        let ids: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn out_of_range_counts_are_clamped() {
        let ctx = ServiceContext::live();
        assert_eq!(render(&ctx, -1, BatchMode::Random, false).unwrap().lines().count(), 1);
        assert_eq!(render(&ctx, 501, BatchMode::Random, false).unwrap().lines().count(), 500);
    }
}
