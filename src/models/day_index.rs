//! Navigation over the distinct dates present in a series.

use crate::models::sample::Series;
use chrono::{Datelike, NaiveDate, Weekday};

/// Sorted distinct calendar dates plus a cursor into them.
///
/// The cursor always satisfies `cursor < len()` while the index is
/// non-empty; navigation wraps modulo the date count. This is the only
/// mutable state in the engine and it is owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct DayIndex {
    dates: Vec<NaiveDate>,
    cursor: usize,
}

impl DayIndex {
    pub fn from_series(series: &Series) -> Self {
        Self {
            dates: series.distinct_dates(),
            cursor: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The currently selected date, if any dates exist.
    pub fn current(&self) -> Option<NaiveDate> {
        self.dates.get(self.cursor).copied()
    }

    /// Advance to the next date, wrapping past the end. No-op when empty.
    pub fn next(&mut self) {
        if !self.dates.is_empty() {
            self.cursor = (self.cursor + 1) % self.dates.len();
        }
    }

    /// Step back to the previous date, wrapping past the start. No-op when
    /// empty.
    pub fn previous(&mut self) {
        if !self.dates.is_empty() {
            self.cursor = (self.cursor + self.dates.len() - 1) % self.dates.len();
        }
    }

    /// Move the cursor to `index`; returns false (cursor unchanged) when out
    /// of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.dates.len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    /// Index of the first date, in ascending order, falling on `weekday`.
    pub fn find_by_weekday(&self, weekday: Weekday) -> Option<usize> {
        self.dates.iter().position(|d| d.weekday() == weekday)
    }
}
