//! Error type shared by the kinetics engine, the run store and the configuration layer.
use std::path::PathBuf;
use thiserror::Error;

/// errors reported to the caller before or during a run
#[derive(Debug, Error)]
pub enum KineticsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rate table {path:?}: {reason}")]
    RateTable { path: PathBuf, reason: String },
    #[error("resume file {path:?}: {reason}")]
    ResumeFile { path: PathBuf, reason: String },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid mechanism: {0}")]
    InvalidMechanism(String),
    #[error("mechanism has {0} table-driven reactions but no rate table was supplied")]
    MissingRateTable(usize),
}

impl KineticsError {
    pub fn rate_table(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        KineticsError::RateTable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn resume_file(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        KineticsError::ResumeFile {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
