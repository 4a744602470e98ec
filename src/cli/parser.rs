use crate::export::ExportFormat;
use crate::utils::date::DEFAULT_REFERENCE_DATE;
use clap::{Parser, Subcommand};

/// Command-line interface definition for scheduletools
#[derive(Parser)]
#[command(
    name = "scheduletools",
    version = env!("CARGO_PKG_VERSION"),
    about = "Schedule tools: parse block-structured schedule sheets, split and expand the result",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a tab-delimited schedule sheet into one row per date, slot and team
    Parse {
        /// Schedule file (tab-delimited)
        schedule: String,

        /// Parser configuration (JSON). Defaults to `parser_config.json`
        /// beside the schedule, then to the built-in settings.
        #[arg(long, short = 'c', value_name = "FILE")]
        config: Option<String>,

        /// Output file. Without it the entries are printed as a table.
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        /// Output format when writing to a file
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Anchor date for week numbers (YYYY-MM-DD)
        #[arg(long = "reference-date", default_value = DEFAULT_REFERENCE_DATE)]
        reference_date: String,

        /// Block start marker (overrides the configuration, default "Date")
        #[arg(long, value_name = "TEXT")]
        marker: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Split a CSV file into one file per group
    Split {
        /// Input CSV (header row required)
        input_csv: String,

        /// Comma-separated columns to group by (e.g. "Team" or "Week,Team")
        #[arg(long = "groupby", short = 'g')]
        groupby: String,

        /// Keep only groups with one of these values (comma-separated)
        #[arg(long = "filter", short = 'f')]
        filter: Option<String>,

        /// Drop groups with any of these values (comma-separated)
        #[arg(long = "exclude", short = 'x')]
        exclude: Option<String>,

        /// Output directory (defaults to the input file's directory)
        #[arg(long = "output-dir", short = 'o', value_name = "DIR")]
        output_dir: Option<String>,
    },

    /// Re-project a CSV file onto the columns of a JSON template
    Expand {
        /// Input CSV (header row required)
        input_csv: String,

        /// Template with "Required", "defaults" and "Mapping"
        #[arg(long, short = 't', value_name = "FILE")]
        template: String,

        /// Output CSV
        #[arg(long, short = 'o', value_name = "FILE")]
        output: String,
    },
}
