//! Error types for log loading

use thiserror::Error;

/// Errors that can occur while loading a sensor log
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to open log file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed tabular data in '{origin}': {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("Required column '{0}' not found in log header")]
    MissingColumn(String),

    #[error("Row at line {line} has {found} fields, header has {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Log contains no data rows")]
    Empty,
}
