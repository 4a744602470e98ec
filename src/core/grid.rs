//! Raw cell grid loaded from a tab-delimited schedule sheet.
//!
//! No header inference happens here: row 0 is data like every other row.
//! Ragged rows are padded with [`Cell::Empty`] so the grid is rectangular.

use crate::errors::{AppError, AppResult};
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    /// Numeric-looking field; `raw` is the trimmed source text.
    Number { value: f64, raw: String },
    Text(String),
}

impl Cell {
    /// Classify a raw field. Whitespace-only fields are empty.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Cell::Number {
                value,
                raw: trimmed.to_string(),
            },
            _ => Cell::Text(trimmed.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Source text of the cell (`""` for empty cells). Numbers keep their
    /// spelling: `007` stays `007`.
    pub fn text(&self) -> &str {
        match self {
            Cell::Empty => "",
            Cell::Number { raw, .. } => raw,
            Cell::Text(s) => s,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawGrid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl RawGrid {
    /// Build a grid from already-split rows, padding short rows.
    pub fn from_rows<S: AsRef<str>>(rows: Vec<Vec<S>>) -> Self {
        let cells = rows
            .into_iter()
            .map(|r| r.iter().map(|f| Cell::from_raw(f.as_ref())).collect())
            .collect();
        Self::from_cells(cells)
    }

    fn from_cells(mut rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Cell::Empty);
        }
        Self { rows, width }
    }

    /// Parse tab-delimited text.
    pub fn from_delimited(content: &str) -> AppResult<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            // blank line
            if record.len() == 1 && record[0].is_empty() {
                continue;
            }
            rows.push(record.iter().map(Cell::from_raw).collect());
        }

        Ok(Self::from_cells(rows))
    }

    /// Read a schedule file from disk.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| AppError::file_access(path, e))?;
        Self::from_delimited(&content)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `(row, col)`; out-of-range positions read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(EMPTY)
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(Vec::as_slice)
    }
}
