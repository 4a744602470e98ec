//! Block segmentation: split the grid into side-by-side sub-schedules.
//!
//! Row layout inside every block:
//!
//! | Row | Contents                                   |
//! |-----|--------------------------------------------|
//! | 0   | free-form label (e.g. the weekday)         |
//! | 1   | marker cell (`Date`) in the block's column |
//! | 2   | one time-interval string per data column   |
//! | 3.. | date cell, then one participant per column |

use crate::core::grid::{Cell, RawGrid};
use crate::errors::{AppError, AppResult};
use std::ops::Range;

/// Row holding the marker cells.
pub const MARKER_ROW: usize = 1;
/// Row holding the time interval of every data column.
pub const TIME_ROW: usize = 2;
/// First row carrying dates and participants.
pub const FIRST_DATA_ROW: usize = 3;

/// A column range of the grid anchored at a marker column.
///
/// The block borrows the grid; it only stores indexes.
#[derive(Debug, Clone)]
pub struct Block<'g> {
    grid: &'g RawGrid,
    columns: Range<usize>,
    rows: Vec<usize>,
}

impl<'g> Block<'g> {
    fn new(grid: &'g RawGrid, columns: Range<usize>) -> Self {
        let date_col = columns.start;
        let rows = (0..grid.height())
            .filter(|&r| r < FIRST_DATA_ROW || !grid.cell(r, date_col).is_empty())
            .collect();
        Self {
            grid,
            columns,
            rows,
        }
    }

    pub fn columns(&self) -> Range<usize> {
        self.columns.clone()
    }

    /// Column holding the dates (the marker column).
    pub fn date_column(&self) -> usize {
        self.columns.start
    }

    /// Columns after the date column.
    pub fn data_columns(&self) -> Range<usize> {
        self.columns.start + 1..self.columns.end
    }

    /// Retained row indexes, header rows included.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Retained rows from [`FIRST_DATA_ROW`] onward.
    pub fn data_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied().filter(|&r| r >= FIRST_DATA_ROW)
    }

    pub fn time_cell(&self, col: usize) -> &'g Cell {
        self.grid.cell(TIME_ROW, col)
    }

    pub fn cell(&self, row: usize, col: usize) -> &'g Cell {
        self.grid.cell(row, col)
    }
}

/// Find the marker columns in [`MARKER_ROW`] and cut the grid into blocks.
///
/// Matching is trimmed and case-insensitive and only text cells qualify.
/// Zero matches is an error: a sheet without markers cannot be read.
pub fn segment_blocks<'g>(grid: &'g RawGrid, marker: &str) -> AppResult<Vec<Block<'g>>> {
    let wanted = marker.trim().to_lowercase();

    let marker_cols: Vec<usize> = grid
        .row(MARKER_ROW)
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| {
                    cell.as_text()
                        .is_some_and(|t| t.trim().to_lowercase() == wanted)
                })
                .map(|(col, _)| col)
                .collect()
        })
        .unwrap_or_default();

    if marker_cols.is_empty() {
        return Err(AppError::NoBlocksFound(marker.to_string()));
    }

    let blocks = marker_cols
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = marker_cols.get(i + 1).copied().unwrap_or(grid.width());
            Block::new(grid, start..end)
        })
        .collect();

    Ok(blocks)
}
