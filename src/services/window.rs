//! High-resolution window selection.

use crate::models::sample::{Sample, Series};
use crate::models::view::HourWindow;
use chrono::{NaiveDate, Timelike};

/// Samples of exactly one calendar date whose hour falls in the window,
/// inclusive of the start hour and exclusive of the end hour.
///
/// Range validation happens at [`HourWindow`] construction; an empty result
/// here is a valid no-data state, not an error.
pub fn select_window<'a>(
    series: &'a Series,
    date: NaiveDate,
    window: HourWindow,
) -> Vec<&'a Sample> {
    series
        .samples()
        .iter()
        .filter(|s| s.timestamp.date() == date && window.contains_hour(s.timestamp.hour()))
        .collect()
}
