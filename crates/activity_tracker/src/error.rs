//! Error types for the activity tracker core.

use std::path::PathBuf;
use thiserror::Error;

/// Tracker errors.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("no calorie data for this activity; nothing was recorded")]
    MissingCalorieData,

    #[error("failed to save activity log to {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read activity log from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("activity log at {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;
