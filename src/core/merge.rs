use crate::config::FormatConfig;
use crate::core::extract::ExtractedEntry;
use crate::models::entry::ScheduleEntry;
use crate::utils::date::{format_date, week_index, weekday_name};
use chrono::NaiveDate;

/// Order the entries of all blocks by (date, start time) and index them.
///
/// The sort is stable, so ties keep their emission order. Block order does
/// not matter for anything but ties.
pub fn merge_entries(
    blocks: Vec<Vec<ExtractedEntry>>,
    format: &FormatConfig,
    reference: NaiveDate,
) -> Vec<ScheduleEntry> {
    let mut all: Vec<ExtractedEntry> = blocks.into_iter().flatten().collect();
    all.sort_by_key(|e| (e.date, e.slot.start));

    all.into_iter()
        .enumerate()
        .map(|(index, e)| ScheduleEntry {
            index,
            week: week_index(e.date, reference),
            day: weekday_name(e.date),
            // patterns are checked on load; ISO is only a last resort
            date: format_date(e.date, &format.date).unwrap_or_else(|| e.date.to_string()),
            start_time: e.slot.start_label,
            duration: e.slot.duration_label,
            team: e.team,
        })
        .collect()
}
