//! Dataset error types
//!
//! Defines all errors that can occur while loading the launch dataset.
//! Every variant is fatal at startup: the process refuses to serve
//! without a fully loaded dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the launch dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset resource could not be opened
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed against the expected columns
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The outcome class column held something other than 0 or 1
    #[error("Row {row}: invalid outcome class {value} (expected 0 or 1)")]
    InvalidClass { row: usize, value: u8 },

    /// Payload mass must be a non-negative number
    #[error("Row {row}: negative payload mass {value}")]
    NegativePayload { row: usize, value: f64 },

    /// The resource parsed but contained no records
    #[error("Dataset is empty")]
    Empty,
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
