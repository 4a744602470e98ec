//! Schedule parsing pipeline: load → segment → extract → merge.

use crate::config::ParserConfig;
use crate::core::extract::extract_block;
use crate::core::grid::RawGrid;
use crate::core::merge::merge_entries;
use crate::core::report::ParseReport;
use crate::core::segment::segment_blocks;
use crate::errors::AppResult;
use chrono::NaiveDate;
use std::path::Path;

/// Parses one schedule grid with one resolved configuration.
///
/// The parser holds no mutable state: calling [`ScheduleParser::parse`]
/// twice yields identical reports.
#[derive(Debug, Clone)]
pub struct ScheduleParser {
    grid: RawGrid,
    config: ParserConfig,
    reference_date: NaiveDate,
    marker: Option<String>,
}

impl ScheduleParser {
    pub fn new(grid: RawGrid, config: ParserConfig, reference_date: NaiveDate) -> Self {
        Self {
            grid,
            config,
            reference_date,
            marker: None,
        }
    }

    /// Load the schedule at `schedule_path` and resolve its configuration
    /// (explicit file, then `parser_config.json` beside the schedule, then
    /// defaults).
    pub fn from_path(
        schedule_path: &Path,
        config_path: Option<&Path>,
        reference_date: NaiveDate,
    ) -> AppResult<Self> {
        let grid = RawGrid::load(schedule_path)?;
        let config = ParserConfig::resolve(config_path, schedule_path)?;
        Ok(Self::new(grid, config, reference_date))
    }

    /// Override the block start marker from the configuration.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn marker(&self) -> &str {
        self.marker
            .as_deref()
            .unwrap_or(&self.config.block_detection.start_marker)
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(&self) -> AppResult<ParseReport> {
        let blocks = segment_blocks(&self.grid, self.marker())?;

        let mut warnings = Vec::new();
        let extracted: Vec<_> = blocks
            .iter()
            .enumerate()
            .map(|(i, block)| extract_block(i, block, &self.config, &mut warnings))
            .collect();

        let entries = merge_entries(extracted, &self.config.format, self.reference_date);

        Ok(ParseReport { entries, warnings })
    }
}
