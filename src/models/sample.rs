//! Activity samples and the loaded series.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

/// Canonical weekday labels, Monday first. Weekly output is always reported
/// in this order regardless of data order.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Canonical label for a weekday.
pub fn day_name(weekday: Weekday) -> &'static str {
    DAYS_OF_WEEK[weekday.num_days_from_monday() as usize]
}

/// Parse a canonical weekday label back to a weekday.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let index = DAYS_OF_WEEK.iter().position(|d| d.eq_ignore_ascii_case(name))?;
    Some(match index {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    })
}

/// One accelerometer reading: a timestamp with second-or-finer precision and
/// a non-negative activity level. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub activity_level: f64,
    /// Derived from the timestamp at construction.
    pub weekday: Weekday,
}

impl Sample {
    pub fn new(timestamp: NaiveDateTime, activity_level: f64) -> Self {
        Self {
            timestamp,
            activity_level,
            weekday: timestamp.weekday(),
        }
    }
}

/// The full timestamp-ordered set of samples for one loaded dataset.
///
/// Owned exclusively by the session and replaced wholesale on reload.
/// Duplicate timestamps are allowed; the stable sort keeps their original
/// row order, which defines first/last within a bucket on ties.
#[derive(Debug, Clone, Default)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Build a series from unordered samples, sorting by timestamp.
    pub fn new(mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        Self { samples }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Sorted distinct calendar dates present in the series.
    pub fn distinct_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.samples.iter().map(|s| s.timestamp.date()).collect();
        dates.sort();
        dates.dedup();
        dates
    }

    /// Samples falling on one calendar date, in series order.
    pub fn for_date(&self, date: NaiveDate) -> Vec<&Sample> {
        self.samples
            .iter()
            .filter(|s| s.timestamp.date() == date)
            .collect()
    }
}
