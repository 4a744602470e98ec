//! Re-project a normalized table onto a required-column template.

use crate::config::ExpandTemplate;
use crate::models::table::ScheduleTable;
use std::collections::HashMap;

/// Build a table with exactly the template's required columns.
///
/// Per cell: same-named input column → mapped source column → template
/// default → empty string.
pub fn expand_table(input: &ScheduleTable, template: &ExpandTemplate) -> ScheduleTable {
    // target column → source column
    let reverse: HashMap<&str, &str> = template
        .mapping
        .iter()
        .map(|(src, dst)| (dst.as_str(), src.as_str()))
        .collect();

    let sources: Vec<ColumnSource> = template
        .required
        .iter()
        .map(|col| {
            if let Some(idx) = input.column_index(col) {
                ColumnSource::Input(idx)
            } else if let Some(idx) = reverse.get(col.as_str()).and_then(|src| input.column_index(src))
            {
                ColumnSource::Input(idx)
            } else if let Some(value) = template.default_for(col) {
                ColumnSource::Constant(value)
            } else {
                ColumnSource::Constant(String::new())
            }
        })
        .collect();

    let rows = input
        .rows
        .iter()
        .map(|row| {
            sources
                .iter()
                .map(|src| match src {
                    ColumnSource::Input(idx) => row.get(*idx).cloned().unwrap_or_default(),
                    ColumnSource::Constant(v) => v.clone(),
                })
                .collect()
        })
        .collect();

    ScheduleTable {
        columns: template.required.clone(),
        rows,
    }
}

enum ColumnSource {
    Input(usize),
    Constant(String),
}
