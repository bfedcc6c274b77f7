//! Timestamp parsing and the elapsed-time axis

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};

/// Date-time layouts tried in order when no explicit format is given
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %I:%M:%S%.f %p",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a timestamp field.
///
/// With `format` set only that layout is accepted. Otherwise RFC 3339 is
/// tried first (normalized to UTC), then the common logger layouts, then a
/// bare date at midnight. Blank or unrecognized text yields `None`.
pub fn parse_timestamp(text: &str, format: Option<&str>) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(format) = format {
        return NaiveDateTime::parse_from_str(text, format).ok();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Seconds since the first record for every record.
///
/// Missing timestamps stay missing. When the first record has no timestamp
/// there is no origin and every element is `None`.
pub fn elapsed_seconds(timestamps: &[Option<NaiveDateTime>]) -> Vec<Option<f64>> {
    let origin = timestamps.first().copied().flatten();

    timestamps
        .iter()
        .map(|ts| match (origin, ts) {
            (Some(t0), Some(t)) => Some(delta_seconds(*t - t0)),
            _ => None,
        })
        .collect()
}

fn delta_seconds(delta: TimeDelta) -> f64 {
    match delta.num_nanoseconds() {
        Some(ns) => ns as f64 / 1e9,
        // Beyond ~292 years nanoseconds overflow i64
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}
