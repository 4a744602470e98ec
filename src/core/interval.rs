//! Interval strings ("6 pm - 7:15 pm") → start time + duration.

use crate::config::FormatConfig;
use crate::utils::time::{
    format_duration, format_time, minutes_between_wrapping, strip_leading_zero,
};
use chrono::NaiveTime;
use chrono::format::{self, Parsed, StrftimeItems};

/// A single accepted spelling of a clock time.
pub trait TimePattern {
    fn try_parse(&self, text: &str) -> Option<NaiveTime>;
}

/// strftime-driven pattern. Patterns without a minute field read as `:00`.
pub struct StrftimePattern {
    format: &'static str,
}

impl StrftimePattern {
    pub const fn new(format: &'static str) -> Self {
        Self { format }
    }
}

impl TimePattern for StrftimePattern {
    fn try_parse(&self, text: &str) -> Option<NaiveTime> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, text, StrftimeItems::new(self.format)).ok()?;
        // no-op when the pattern already set the minute
        let _ = parsed.set_minute(0);
        parsed.to_naive_time().ok()
    }
}

/// Accepted spellings, tried in order. Bare hour first, so "6 pm" is never
/// handed to the hour:minute pattern.
pub const TIME_PATTERNS: &[&dyn TimePattern] = &[
    &StrftimePattern::new("%I %p"),
    &StrftimePattern::new("%I:%M %p"),
];

/// Try every pattern in order, first success wins.
pub fn parse_clock(text: &str) -> Option<NaiveTime> {
    TIME_PATTERNS.iter().find_map(|p| p.try_parse(text))
}

/// Parsed time header of one data column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    /// Minutes; intervals crossing midnight wrap to the next day.
    pub duration_minutes: i64,
    /// Start time rendered with the configured pattern.
    pub start_label: String,
    /// Duration rendered with the configured style.
    pub duration_label: String,
}

/// Parse the raw start and end of an interval, or `None` for label cells
/// and unparseable text.
pub fn parse_bounds(interval: &str) -> Option<(NaiveTime, NaiveTime)> {
    let interval = interval.trim();
    if interval.is_empty() || !interval.contains('-') || interval.contains("Time") {
        return None;
    }

    let (start, end) = interval.split_once('-')?;
    let start = parse_clock(start.trim().to_lowercase().as_str())?;
    let end = parse_clock(end.trim().to_lowercase().as_str())?;
    Some((start, end))
}

/// Full interval parse, formatted per configuration.
pub fn parse_interval(interval: &str, format: &FormatConfig) -> Option<TimeSlot> {
    let (start, end) = parse_bounds(interval)?;
    let duration_minutes = minutes_between_wrapping(start, end);
    let start_label = strip_leading_zero(&format_time(start, &format.time)?);

    Some(TimeSlot {
        start,
        duration_minutes,
        start_label,
        duration_label: format_duration(duration_minutes, format.duration),
    })
}

/// Label-only variant: `(start, duration)` strings or `(None, None)`.
pub fn parse_time_and_duration(
    interval: &str,
    format: &FormatConfig,
) -> (Option<String>, Option<String>) {
    match parse_interval(interval, format) {
        Some(slot) => (Some(slot.start_label), Some(slot.duration_label)),
        None => (None, None),
    }
}
