//! Time utilities: interval arithmetic and duration formatting.

use crate::config::DurationStyle;
use chrono::NaiveTime;
use std::fmt::Write;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes from `start` to `end`. An end before the start is taken to be on
/// the next day.
pub fn minutes_between_wrapping(start: NaiveTime, end: NaiveTime) -> i64 {
    let mins = (end - start).num_minutes();
    if end < start {
        mins + MINUTES_PER_DAY
    } else {
        mins
    }
}

/// Render a clock time with a strftime pattern; `None` when the pattern asks
/// for fields a time does not have (e.g. `%Y`, `%Z`).
pub fn format_time(time: NaiveTime, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", time.format(pattern)).ok()?;
    Some(out)
}

pub fn format_duration(mins: i64, style: DurationStyle) -> String {
    let m = mins.abs();
    match style {
        DurationStyle::HourMinutes => format!("{}:{:02}", m / 60, m % 60),
        DurationStyle::PaddedHourMinutes => format!("{:02}:{:02}", m / 60, m % 60),
    }
}

/// "06:00 PM" → "6:00 PM". Only one zero goes, so "00:30" keeps its hour.
pub fn strip_leading_zero(s: &str) -> String {
    match s.strip_prefix('0') {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest.to_string(),
        _ => s.to_string(),
    }
}
