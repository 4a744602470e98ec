//! Parsing engine plus the two table collaborators (`split`, `expand`).

pub mod expander;
pub mod extract;
pub mod grid;
pub mod interval;
pub mod merge;
pub mod parser;
pub mod report;
pub mod segment;
pub mod splitter;

pub use expander::expand_table;
pub use grid::{Cell, RawGrid};
pub use parser::ScheduleParser;
pub use report::{ParseReport, ParseWarning};
pub use segment::{Block, segment_blocks};
pub use splitter::CsvSplitter;
