//! scheduletools library root.
//! Exposes the parsing engine, the table collaborators, the CLI parser and
//! the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use errors::AppResult;

pub use config::{ExpandTemplate, ParserConfig};
pub use crate::core::{CsvSplitter, ParseReport, ParseWarning, RawGrid, ScheduleParser};
pub use errors::AppError;
pub use models::entry::ScheduleEntry;
pub use models::table::ScheduleTable;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Parse { .. } => cli::commands::parse::handle(&cli.command),
        Commands::Split { .. } => cli::commands::split::handle(&cli.command),
        Commands::Expand { .. } => cli::commands::expand::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}
