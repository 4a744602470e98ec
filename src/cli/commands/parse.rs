use crate::cli::parser::Commands;
use crate::core::ScheduleParser;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::entry::ENTRY_COLUMNS;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_iso_date;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

/// Handle the `parse` subcommand
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Parse {
        schedule,
        config,
        output,
        format,
        reference_date,
        marker,
        force,
    } = cmd
    {
        let reference = parse_iso_date(reference_date)?;
        let schedule_path = expand_tilde(schedule);
        let config_path = config.as_deref().map(expand_tilde);

        let mut parser =
            ScheduleParser::from_path(&schedule_path, config_path.as_deref(), reference)?;
        if let Some(m) = marker {
            parser = parser.with_marker(m.clone());
        }

        let report = parser.parse()?;
        for w in &report.warnings {
            warning(w);
        }

        match output {
            Some(out) => {
                ExportLogic::export(&report.entries, *format, &expand_tilde(out), *force)?;
            }
            None if report.is_empty() => info("No schedule entries found."),
            None => {
                let mut table = Table::with_headers(&ENTRY_COLUMNS);
                for entry in &report.entries {
                    table.add_row(entry.to_row());
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
