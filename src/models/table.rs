//! In-memory string table shared by `split` and `expand`.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{ENTRY_COLUMNS, ScheduleEntry};
use csv::{ReaderBuilder, Writer};
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ScheduleTable {
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        Self {
            columns: ENTRY_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: entries.iter().map(ScheduleEntry::to_row).collect(),
        }
    }

    /// Read a comma-delimited file whose first line is the header.
    pub fn read_csv(path: &Path) -> AppResult<Self> {
        let file = std::fs::File::open(path).map_err(|e| AppError::file_access(path, e))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
        let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let width = columns.len();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let mut row: Vec<String> = record?.iter().map(str::to_string).collect();
            row.resize(width, String::new());
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    pub fn write_csv(&self, path: &Path) -> AppResult<()> {
        let file = std::fs::File::create(path).map_err(|e| AppError::file_access(path, e))?;
        self.to_writer(file)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> AppResult<()> {
        let mut wtr = Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
