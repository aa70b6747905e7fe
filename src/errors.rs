//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Log store
    // ---------------------------
    #[error("Corrupted log {} at line {line}: {reason}", path.display())]
    DataCorruption {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error(
        "Cannot read running timers from {}: {reason} (delete the file to reset them)",
        path.display()
    )]
    SessionFile { path: PathBuf, reason: String },

    // ---------------------------
    // User input / tracking rules
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Invalid category: {0} (use 'billable' or 'non-billable')")]
    InvalidCategory(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Validation failures are warnings for the user: nothing was changed.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
