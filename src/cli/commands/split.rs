use crate::cli::parser::Commands;
use crate::core::splitter::{CsvSplitter, parse_list};
use crate::errors::AppResult;
use crate::models::table::ScheduleTable;
use crate::ui::messages::{success, warning};
use crate::utils::path::{expand_tilde, file_stem, parent_or_current};

/// Handle the `split` subcommand
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Split {
        input_csv,
        groupby,
        filter,
        exclude,
        output_dir,
    } = cmd
    {
        let input = expand_tilde(input_csv);
        let table = ScheduleTable::read_csv(&input)?;

        let splitter = CsvSplitter::new(
            table,
            parse_list(groupby),
            filter.as_deref().map(parse_list),
            exclude.as_deref().map(parse_list),
        )?;

        let dir = match output_dir {
            Some(d) => expand_tilde(d),
            None => parent_or_current(&input),
        };

        let paths = splitter.export(&dir, &file_stem(&input))?;

        if paths.is_empty() {
            warning("No files created. (Check filters or grouping.)");
        }
        for path in &paths {
            success(format!("Created: {}", path.display()));
        }
    }
    Ok(())
}
