//! Error types for loading building data and writing loss reports

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a portfolio or reporting losses
#[derive(Debug, Error)]
pub enum LossError {
    /// Input file could not be opened or read
    #[error("failed to read building data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, or a record with a missing or non-numeric field
    #[error("invalid building data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The estimated loss report needs an identifier for every building
    #[error("building at index {index} has no buildingId")]
    MissingBuildingId { index: usize },

    /// Writing a report line failed
    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),

    /// Writing the per-building breakdown failed
    #[error("failed to write breakdown: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LossError>;
