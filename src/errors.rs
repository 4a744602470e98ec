//! Unified application error type.
//! All modules (config, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("Cannot access file '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Invalid configuration file '{}': {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    // ---------------------------
    // Structural errors
    // ---------------------------
    #[error("No block start marker '{0}' found in the header row")]
    NoBlocksFound(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config_parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AppError::ConfigParse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
