use crate::models::entry::ScheduleEntry;
use std::fmt;

/// Non-fatal anomaly found while reading a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// Time header that is not an interval; the column is skipped.
    InvalidInterval {
        block: usize,
        column: usize,
        text: String,
    },
    /// Date cell that does not match the date pattern; the row is skipped.
    InvalidDate {
        block: usize,
        row: usize,
        text: String,
    },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::InvalidInterval {
                block,
                column,
                text,
            } => write!(
                f,
                "Skipping invalid or label interval '{text}' (block {block}, column {column})"
            ),
            ParseWarning::InvalidDate { block, row, text } => write!(
                f,
                "Skipping row with unparseable date '{text}' (block {block}, row {row})"
            ),
        }
    }
}

/// Result of a parse: ordered entries plus the warnings collected on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub entries: Vec<ScheduleEntry>,
    pub warnings: Vec<ParseWarning>,
}

impl ParseReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
