use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Column template used by `expand`.
///
/// ```json
/// {
///   "Required": ["Date", "Time", "Team", "Location"],
///   "defaults": { "Location": "Main Arena" },
///   "Mapping": { "Start Time": "Time" }
/// }
/// ```
///
/// `Mapping` goes from a source column of the input to a required column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandTemplate {
    #[serde(rename = "Required")]
    pub required: Vec<String>,
    pub defaults: BTreeMap<String, Value>,
    #[serde(rename = "Mapping")]
    pub mapping: BTreeMap<String, String>,
}

impl ExpandTemplate {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| AppError::file_access(path, e))?;
        let template: ExpandTemplate = serde_json::from_str(&content)
            .map_err(|e| AppError::config_parse(path, e.to_string()))?;

        if template.required.is_empty() {
            return Err(AppError::config_parse(
                path,
                "template must list at least one Required column",
            ));
        }

        Ok(template)
    }

    /// Default value for a required column, rendered as cell text.
    pub fn default_for(&self, column: &str) -> Option<String> {
        self.defaults.get(column).map(|v| match v {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }
}
