//! CSV ingestion of accelerometer data.
//!
//! Required columns: `timestamp` and `activity_level`. Any data-shape
//! problem aborts the load with no partial series; the caller keeps
//! whatever it had loaded before.

use crate::error::{Error, Result};
use crate::models::sample::{Sample, Series};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const COLUMN_TIMESTAMP: &str = "timestamp";
pub const COLUMN_ACTIVITY: &str = "activity_level";

/// Load a series from a CSV file on disk.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Series> {
    let path = path.as_ref();
    log::info!("loading activity data from {}", path.display());
    let file = File::open(path)?;
    load_from_reader(file)
}

/// Load a series from any CSV byte stream.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Series> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let timestamp_idx = headers.iter().position(|h| h.trim() == COLUMN_TIMESTAMP);
    let activity_idx = headers.iter().position(|h| h.trim() == COLUMN_ACTIVITY);

    let (timestamp_idx, activity_idx) = match (timestamp_idx, activity_idx) {
        (Some(t), Some(a)) => (t, a),
        (t, a) => {
            let mut missing = Vec::new();
            if t.is_none() {
                missing.push(COLUMN_TIMESTAMP.to_string());
            }
            if a.is_none() {
                missing.push(COLUMN_ACTIVITY.to_string());
            }
            return Err(Error::missing_columns(missing));
        }
    };

    let mut samples = Vec::new();
    for (record_index, record) in csv_reader.records().enumerate() {
        let record = record?;
        // 1-based file row; the header occupies row 1
        let row = record_index + 2;

        let raw_timestamp = record.get(timestamp_idx).unwrap_or("").trim();
        let timestamp = parse_timestamp(raw_timestamp)
            .ok_or_else(|| Error::malformed_timestamp(row, raw_timestamp))?;

        let raw_activity = record.get(activity_idx).unwrap_or("").trim();
        let activity_level: f64 = raw_activity
            .parse()
            .map_err(|_| Error::malformed_activity(row, raw_activity))?;

        samples.push(Sample::new(timestamp, activity_level));
    }

    log::info!("loaded {} samples", samples.len());
    Ok(Series::new(samples))
}

/// Accepted timestamp shapes, most specific first.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    // bare dates land at midnight
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
