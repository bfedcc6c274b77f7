//! Log file formats
//!
//! Detects delimited formats and writes prepared logs back out.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use super::SensorLog;

/// Header of the elapsed-time column in written logs
pub const ELAPSED_COLUMN: &str = "time_s";

/// Supported delimited log formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
}

impl LogFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "csv" => Some(LogFormat::Csv),
            "tsv" | "tab" => Some(LogFormat::Tsv),
            _ => None,
        }
    }

    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            LogFormat::Csv => "csv",
            LogFormat::Tsv => "tsv",
        }
    }

    /// Field delimiter byte
    pub fn delimiter(&self) -> u8 {
        match self {
            LogFormat::Csv => b',',
            LogFormat::Tsv => b'\t',
        }
    }
}

/// A derived numeric column appended after the log's own columns
#[derive(Debug, Clone, Copy)]
pub struct DerivedColumn<'a> {
    /// Header to write
    pub name: &'a str,
    /// One value per log row; `None` and NaN are written as empty fields
    pub values: &'a [Option<f64>],
}

/// Write a prepared log as CSV.
///
/// Columns are `time_s`, then the normalized log columns, then `derived`.
pub fn write_csv<W: Write>(
    writer: W,
    log: &SensorLog,
    derived: &[DerivedColumn<'_>],
) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    let header = std::iter::once(ELAPSED_COLUMN)
        .chain(log.columns().iter().map(String::as_str))
        .chain(derived.iter().map(|d| d.name));
    wtr.write_record(header)?;

    for (i, row) in log.rows().iter().enumerate() {
        let mut record = Vec::with_capacity(1 + row.len() + derived.len());
        record.push(format_value(log.elapsed_seconds()[i]));
        record.extend(row.iter().cloned());
        for column in derived {
            record.push(format_value(column.values.get(i).copied().flatten()));
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a prepared log to a CSV file
pub fn write_csv_file<P: AsRef<Path>>(
    path: P,
    log: &SensorLog,
    derived: &[DerivedColumn<'_>],
) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_csv(file, log, derived)
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => v.to_string(),
        _ => String::new(),
    }
}
