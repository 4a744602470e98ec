use serde::{Deserialize, Serialize};

/// Output column names, in order.
pub const ENTRY_COLUMNS: [&str; 7] = [
    "Index",
    "Week",
    "Day",
    "Date",
    "Start Time",
    "Duration",
    "Team",
];

/// One normalized schedule row: a participant in a time slot on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(rename = "Index")]
    pub index: usize,
    #[serde(rename = "Week")]
    pub week: i64,
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Team")]
    pub team: String,
}

impl ScheduleEntry {
    /// Cells in [`ENTRY_COLUMNS`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.index.to_string(),
            self.week.to_string(),
            self.day.clone(),
            self.date.clone(),
            self.start_time.clone(),
            self.duration.clone(),
            self.team.clone(),
        ]
    }
}
