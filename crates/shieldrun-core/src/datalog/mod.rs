//! Sensor Log Preparation
//!
//! Loads timestamped sensor logs, derives the elapsed-time axis and
//! normalizes column names for analysis.

mod columns;
mod error;
mod format;
mod loader;
mod timestamp;

pub use columns::{normalize_column_name, normalize_columns};
pub use error::LogError;
pub use format::{write_csv, write_csv_file, DerivedColumn, LogFormat, ELAPSED_COLUMN};
pub use loader::{LoadOptions, DEFAULT_TIMESTAMP_COLUMN};
pub use timestamp::{elapsed_seconds, parse_timestamp};

use chrono::NaiveDateTime;
use std::io::Read;
use std::path::Path;

/// A loaded sensor log.
///
/// Rows keep acquisition order. Timestamps and elapsed seconds are computed
/// once at load and share the row ordering.
#[derive(Debug, Clone)]
pub struct SensorLog {
    raw_columns: Vec<String>,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    timestamp_index: usize,
    timestamps: Vec<Option<NaiveDateTime>>,
    elapsed: Vec<Option<f64>>,
}

impl SensorLog {
    /// Load a log file
    pub fn from_path<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self, LogError> {
        loader::load_path(path.as_ref(), options)
    }

    /// Load a log from any reader
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self, LogError> {
        loader::load_reader(reader, "<reader>", options)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Normalized column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Column names as they appeared in the header
    pub fn raw_columns(&self) -> &[String] {
        &self.raw_columns
    }

    /// All records, every row padded to the header width
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Normalized name of the timestamp column
    pub fn timestamp_column(&self) -> &str {
        &self.columns[self.timestamp_index]
    }

    /// Parsed timestamps, `None` where the field could not be parsed
    pub fn timestamps(&self) -> &[Option<NaiveDateTime>] {
        &self.timestamps
    }

    /// Seconds since the first record
    pub fn elapsed_seconds(&self) -> &[Option<f64>] {
        &self.elapsed
    }

    /// Total time covered by the log
    pub fn duration_secs(&self) -> Option<f64> {
        self.elapsed.iter().rev().find_map(|e| *e)
    }

    /// Find a column by normalized or raw name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .or_else(|| self.raw_columns.iter().position(|c| c == name))
    }

    /// Text fields of a column
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Numeric values of a column; blank or non-numeric fields are `None`
    pub fn column_f64(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row[idx].trim().parse::<f64>().ok())
                .collect(),
        )
    }
}

/// Load a log with default options and return `(elapsed_seconds, log)`
pub fn load_tc_data<P: AsRef<Path>>(path: P) -> Result<(Vec<Option<f64>>, SensorLog), LogError> {
    let path = path.as_ref();
    let log = SensorLog::from_path(path, &LoadOptions::for_path(path))?;
    Ok((log.elapsed.clone(), log))
}
