//! Group a normalized table by column values and write one file per group.

use crate::errors::{AppError, AppResult};
use crate::models::table::ScheduleTable;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("static regex"));

/// One group: its key values (one per group column) and its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub keys: Vec<String>,
    pub table: ScheduleTable,
}

impl Group {
    /// Filename suffix: keys joined by `_`, with spaces and reserved
    /// characters replaced.
    pub fn file_suffix(&self) -> String {
        self.keys
            .iter()
            .map(|k| sanitize_filename(&k.replace(' ', "_")))
            .collect::<Vec<_>>()
            .join("_")
    }
}

pub struct CsvSplitter {
    table: ScheduleTable,
    group_idx: Vec<usize>,
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
}

impl CsvSplitter {
    pub fn new(
        table: ScheduleTable,
        group_columns: Vec<String>,
        include: Option<Vec<String>>,
        exclude: Option<Vec<String>>,
    ) -> AppResult<Self> {
        if group_columns.is_empty() {
            return Err(AppError::Validation(
                "at least one group-by column is required".to_string(),
            ));
        }

        let group_idx = group_columns
            .iter()
            .map(|c| {
                table.column_index(c).ok_or_else(|| {
                    AppError::Validation(format!(
                        "group-by column '{c}' not found (available: {})",
                        table.columns.join(", ")
                    ))
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            table,
            group_idx,
            include,
            exclude,
        })
    }

    /// Groups in ascending key order, filters applied.
    ///
    /// Rows with an empty value in any group column belong to no group.
    pub fn split(&self) -> Vec<Group> {
        let mut order: Vec<Vec<String>> = Vec::new();
        let mut buckets: HashMap<Vec<String>, Vec<Vec<String>>> = HashMap::new();

        for row in &self.table.rows {
            let keys: Vec<String> = self
                .group_idx
                .iter()
                .map(|&i| row.get(i).cloned().unwrap_or_default())
                .collect();
            if keys.iter().any(|k| k.trim().is_empty()) {
                continue;
            }
            let bucket = buckets.entry(keys.clone()).or_insert_with(|| {
                order.push(keys);
                Vec::new()
            });
            bucket.push(row.clone());
        }

        order.sort_by(|a, b| compare_keys(a, b));

        order
            .into_iter()
            .filter(|keys| self.should_include(keys))
            .map(|keys| {
                let rows = buckets.remove(&keys).unwrap_or_default();
                Group {
                    keys,
                    table: ScheduleTable {
                        columns: self.table.columns.clone(),
                        rows,
                    },
                }
            })
            .collect()
    }

    fn should_include(&self, keys: &[String]) -> bool {
        if let Some(include) = &self.include
            && !keys.iter().any(|k| include.contains(k))
        {
            return false;
        }
        if let Some(exclude) = &self.exclude
            && keys.iter().any(|k| exclude.contains(k))
        {
            return false;
        }
        true
    }

    /// Write every group to `<dir>/<base_name>_<suffix>.csv`.
    pub fn export(&self, output_dir: &Path, base_name: &str) -> AppResult<Vec<PathBuf>> {
        fs::create_dir_all(output_dir).map_err(|e| AppError::file_access(output_dir, e))?;

        let mut paths = Vec::new();
        for group in self.split() {
            let path = output_dir.join(format!("{base_name}_{}.csv", group.file_suffix()));
            group.table.write_csv(&path)?;
            paths.push(path);
        }
        Ok(paths)
    }
}

pub fn sanitize_filename(name: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(name, "_").into_owned()
}

fn compare_keys(a: &[String], b: &[String]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| compare_values(x, y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

// integers compare numerically so week "10" sorts after week "9"
fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Comma-separated CLI list → trimmed, non-empty values.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
