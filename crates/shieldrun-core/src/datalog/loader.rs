//! Delimited log loader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use super::columns::normalize_columns;
use super::format::LogFormat;
use super::timestamp::{elapsed_seconds, parse_timestamp};
use super::{LogError, SensorLog};

/// Default name of the column holding absolute timestamps
pub const DEFAULT_TIMESTAMP_COLUMN: &str = "RealTimestamp";

/// Options controlling how a log is parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Header of the timestamp column, matched exactly before normalization
    pub timestamp_column: String,
    /// Field delimiter byte
    pub delimiter: u8,
    /// Explicit chrono format for the timestamp column (autodetect if unset)
    pub timestamp_format: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            timestamp_column: DEFAULT_TIMESTAMP_COLUMN.to_string(),
            delimiter: b',',
            timestamp_format: None,
        }
    }
}

impl LoadOptions {
    /// Default options with the delimiter picked from the file extension
    pub fn for_path(path: &Path) -> Self {
        let delimiter = LogFormat::from_extension(path)
            .unwrap_or(LogFormat::Csv)
            .delimiter();
        Self {
            delimiter,
            ..Self::default()
        }
    }
}

pub(super) fn load_path(path: &Path, options: &LoadOptions) -> Result<SensorLog, LogError> {
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| LogError::Open {
        path: origin.clone(),
        source,
    })?;
    load_reader(file, &origin, options)
}

pub(super) fn load_reader<R: Read>(
    reader: R,
    origin: &str,
    options: &LoadOptions,
) -> Result<SensorLog, LogError> {
    let csv_error = |source: csv::Error| LogError::Csv {
        origin: origin.to_string(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader);

    let raw_columns: Vec<String> = rdr
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let ts_index = raw_columns
        .iter()
        .position(|c| *c == options.timestamp_column)
        .ok_or_else(|| LogError::MissingColumn(options.timestamp_column.clone()))?;

    let width = raw_columns.len();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(csv_error)?;
        if record.len() > width {
            return Err(LogError::RaggedRow {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: width,
                found: record.len(),
            });
        }

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(LogError::Empty);
    }

    let format = options.timestamp_format.as_deref();
    let timestamps: Vec<_> = rows
        .iter()
        .map(|row| parse_timestamp(&row[ts_index], format))
        .collect();

    let unparsed = timestamps.iter().filter(|t| t.is_none()).count();
    if unparsed > 0 {
        tracing::warn!(
            "{unparsed} of {} timestamps in '{origin}' could not be parsed",
            rows.len()
        );
    }

    let elapsed = elapsed_seconds(&timestamps);
    let columns = normalize_columns(raw_columns.iter().map(String::as_str));

    tracing::debug!(
        "Loaded {} rows x {} columns from '{origin}'",
        rows.len(),
        width
    );

    Ok(SensorLog {
        raw_columns,
        columns,
        rows,
        timestamp_index: ts_index,
        timestamps,
        elapsed,
    })
}
