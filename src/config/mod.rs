use crate::errors::{AppError, AppResult};
use crate::utils::date::format_date;
use crate::utils::time::format_time;
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod template;

pub use template::ExpandTemplate;

/// Name of the configuration file looked up beside the schedule input.
pub const FALLBACK_CONFIG_NAME: &str = "parser_config.json";

/// Parser configuration, mirroring the JSON layout of `parser_config.json`.
///
/// Every section is optional: missing keys fall back to the built-in
/// defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    #[serde(rename = "Format")]
    pub format: FormatConfig,
    #[serde(rename = "Missing Values")]
    pub missing_values: MissingValues,
    #[serde(rename = "Split")]
    pub split: SplitConfig,
    #[serde(rename = "Block Detection")]
    pub block_detection: BlockDetection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Duration")]
    pub duration: DurationStyle,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date: "%m/%d/%Y".to_string(),
            time: "%I:%M %p".to_string(),
            duration: DurationStyle::default(),
        }
    }
}

/// How durations are rendered in the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DurationStyle {
    /// `1:15`, `12:00`
    #[default]
    #[serde(rename = "H:MM")]
    HourMinutes,
    /// `01:15`, `12:00`
    #[serde(rename = "HH:MM")]
    PaddedHourMinutes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissingValues {
    #[serde(rename = "Omit")]
    pub omit: bool,
    #[serde(rename = "Replacement")]
    pub replacement: String,
}

impl Default for MissingValues {
    fn default() -> Self {
        Self {
            omit: true,
            replacement: "missing".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    #[serde(rename = "Skip")]
    pub skip: bool,
    #[serde(rename = "Separator")]
    pub separator: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            skip: false,
            separator: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockDetection {
    pub start_marker: String,
    pub skip_meta_rows: bool,
    pub meta_patterns: Vec<String>,
}

impl Default for BlockDetection {
    fn default() -> Self {
        Self {
            start_marker: "Date".to_string(),
            skip_meta_rows: true,
            meta_patterns: vec!["ice".to_string()],
        }
    }
}

impl ParserConfig {
    /// Resolve the configuration for a schedule file.
    ///
    /// Order: explicit path (must exist) → `parser_config.json` next to the
    /// schedule → built-in defaults.
    pub fn resolve(explicit: Option<&Path>, schedule_path: &Path) -> AppResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = Self::fallback_path(schedule_path);
        if fallback.exists() {
            return Self::load(&fallback);
        }

        Ok(Self::default())
    }

    /// Path of the sibling configuration file for a schedule input.
    pub fn fallback_path(schedule_path: &Path) -> PathBuf {
        schedule_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(FALLBACK_CONFIG_NAME)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| AppError::file_access(path, e))?;
        Self::from_json(&content).map_err(|reason| AppError::config_parse(path, reason))
    }

    /// Parse a configuration from JSON text. Errors are returned as a plain
    /// reason so the caller can attach the file they came from.
    pub fn from_json(content: &str) -> Result<Self, String> {
        let cfg: ParserConfig = serde_json::from_str(content).map_err(|e| e.to_string())?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), String> {
        if !is_valid_strftime(&self.format.date) {
            return Err(format!("invalid date pattern '{}'", self.format.date));
        }
        if !is_valid_strftime(&self.format.time) {
            return Err(format!("invalid time pattern '{}'", self.format.time));
        }

        // well-formed specifiers can still be unrenderable for the value type
        let sample_date = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap_or_default();
        let sample_time = NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default();
        if format_date(sample_date, &self.format.date).is_none() {
            return Err(format!(
                "date pattern '{}' uses fields a calendar date does not have",
                self.format.date
            ));
        }
        if format_time(sample_time, &self.format.time).is_none() {
            return Err(format!(
                "time pattern '{}' uses fields a clock time does not have",
                self.format.time
            ));
        }
        if self.split.separator.is_empty() {
            return Err("Split.Separator must not be empty".to_string());
        }
        Ok(())
    }
}

// chrono reports broken specifiers as Item::Error; formatting with one fails
fn is_valid_strftime(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
