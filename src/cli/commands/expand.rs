use crate::cli::parser::Commands;
use crate::config::ExpandTemplate;
use crate::core::expand_table;
use crate::errors::AppResult;
use crate::models::table::ScheduleTable;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Handle the `expand` subcommand
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Expand {
        input_csv,
        template,
        output,
    } = cmd
    {
        let table = ScheduleTable::read_csv(&expand_tilde(input_csv))?;
        let template = ExpandTemplate::load(&expand_tilde(template))?;

        let expanded = expand_table(&table, &template);

        let out = expand_tilde(output);
        expanded.write_csv(&out)?;
        success(format!("Expanded schedule saved to: {}", out.display()));
    }
    Ok(())
}
