use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::fmt::Write;

/// Default anchor for week numbers.
pub const DEFAULT_REFERENCE_DATE: &str = "2025-09-02";

/// Parse a `YYYY-MM-DD` date (CLI reference date).
pub fn parse_iso_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Whole weeks between `reference` and `date`, floored: the six days before
/// the reference are week -1.
pub fn week_index(date: NaiveDate, reference: NaiveDate) -> i64 {
    (date - reference).num_days().div_euclid(7)
}

/// English weekday name ("Monday").
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Render a date with a strftime pattern; `None` when the pattern asks for
/// fields a date does not have (e.g. `%H`).
pub fn format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Parse a schedule date with the configured pattern.
pub fn parse_with_format(s: &str, pattern: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), pattern).ok()
}
