//! Row walk over one block: time slots × dated rows × participants.

use crate::config::ParserConfig;
use crate::core::grid::Cell;
use crate::core::interval::{TimeSlot, parse_interval};
use crate::core::report::ParseWarning;
use crate::core::segment::Block;
use crate::utils::date::parse_with_format;
use chrono::NaiveDate;

/// Entry as emitted by a block, before ordering and indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub team: String,
}

/// Extract every entry of a block, column by column.
///
/// Cell-level problems never abort the block: the offending column or row
/// is skipped and, when it is an anomaly rather than an expected shape, a
/// warning is pushed.
pub fn extract_block(
    block_no: usize,
    block: &Block<'_>,
    cfg: &ParserConfig,
    warnings: &mut Vec<ParseWarning>,
) -> Vec<ExtractedEntry> {
    let dates = resolve_dates(block_no, block, cfg, warnings);
    let mut out = Vec::new();

    for col in block.data_columns() {
        let Some(slot) = resolve_slot(block_no, block, col, cfg, warnings) else {
            continue;
        };

        for &(row, date) in &dates {
            for team in resolve_participants(block.cell(row, col), cfg) {
                out.push(ExtractedEntry {
                    date,
                    slot: slot.clone(),
                    team,
                });
            }
        }
    }

    out
}

/// Time slot of a data column; `None` skips the whole column.
fn resolve_slot(
    block_no: usize,
    block: &Block<'_>,
    col: usize,
    cfg: &ParserConfig,
    warnings: &mut Vec<ParseWarning>,
) -> Option<TimeSlot> {
    let cell = block.time_cell(col);
    if cell.is_empty() {
        return None;
    }

    let text = cell.text();
    let slot = parse_interval(text, &cfg.format);
    if slot.is_none() {
        warnings.push(ParseWarning::InvalidInterval {
            block: block_no,
            column: col,
            text: text.to_string(),
        });
    }
    slot
}

/// Dated rows of a block, parsed once and shared by every column.
fn resolve_dates(
    block_no: usize,
    block: &Block<'_>,
    cfg: &ParserConfig,
    warnings: &mut Vec<ParseWarning>,
) -> Vec<(usize, NaiveDate)> {
    let date_col = block.date_column();
    let mut dates = Vec::new();

    for row in block.data_rows() {
        let text = block.cell(row, date_col).text();

        if is_meta_row(text, cfg) {
            continue;
        }

        match parse_with_format(text, &cfg.format.date) {
            Some(date) => dates.push((row, date)),
            None => warnings.push(ParseWarning::InvalidDate {
                block: block_no,
                row,
                text: text.to_string(),
            }),
        }
    }

    dates
}

/// Rows such as "Ice maintenance" sit in the date column but are not dates.
pub fn is_meta_row(date_text: &str, cfg: &ParserConfig) -> bool {
    if !cfg.block_detection.skip_meta_rows {
        return false;
    }
    let lowered = date_text.to_lowercase();
    cfg.block_detection
        .meta_patterns
        .iter()
        .filter(|p| !p.is_empty())
        .any(|p| lowered.contains(&p.to_lowercase()))
}

/// Participant tokens of a cell according to the missing/split policy.
pub fn resolve_participants(cell: &Cell, cfg: &ParserConfig) -> Vec<String> {
    let text = cell.text().trim();

    if text.is_empty() {
        if cfg.missing_values.omit {
            return Vec::new();
        }
        return vec![cfg.missing_values.replacement.clone()];
    }

    if cfg.split.skip {
        return vec![text.to_string()];
    }

    text.split(cfg.split.separator.as_str())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
