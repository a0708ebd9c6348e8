//! Candle records derived from time buckets.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One OHLC-style aggregate over a single time bucket.
///
/// `first`/`last` follow the bucket's arrival order (ascending timestamp,
/// original row order on ties), not value order. Candles are created fresh
/// on every aggregation call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Start of the half-open bucket interval.
    pub bucket_start: NaiveDateTime,
    /// Minutes since midnight of the bucket start, fractional for
    /// sub-minute buckets. This is the rendering layer's x coordinate.
    pub time_index: f64,
    /// Display label: `HH:MM:SS` for sub-minute buckets, `HH:MM` otherwise.
    pub time_label: String,
    /// Activity level of the earliest sample in the bucket.
    pub first: f64,
    /// Activity level of the latest sample in the bucket.
    pub last: f64,
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    /// Sample standard deviation (n-1); 0.0 for single-sample buckets.
    pub std: f64,
    pub sample_count: usize,
}

impl Candle {
    /// Hour of day the bucket starts in.
    pub fn hour(&self) -> u32 {
        self.bucket_start.hour()
    }
}

/// One candle-like record per weekday label, pooling all samples sharing
/// that weekday across every date in the series (not per calendar week).
///
/// There is no real opening/closing sample across non-contiguous dates, so
/// `first` and `last` are both set to the pooled mean: week-view candles
/// have zero body height by construction, and renderers must derive color
/// and height from the max/min spread. Absent weekdays still emit a record
/// with `sample_count == 0` and zeroed aggregates so weekly output is
/// always exactly 7 rows, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAggregate {
    /// Canonical weekday label ("Monday".."Sunday").
    pub day: String,
    pub first: f64,
    pub last: f64,
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    pub std: f64,
    pub sample_count: usize,
}

impl WeeklyAggregate {
    /// Whether any samples fell on this weekday.
    pub fn has_data(&self) -> bool {
        self.sample_count > 0
    }
}
