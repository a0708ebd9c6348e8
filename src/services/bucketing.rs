//! Time-bucket partitioning of samples.

use crate::models::sample::{Sample, Series};
use chrono::Timelike;
use std::collections::BTreeMap;

/// Group samples into half-open `[start, start + width)` intervals keyed by
/// epoch seconds of the interval start.
///
/// Bucket starts are `floor(epoch / width) * width`: aligned to absolute
/// epoch time, not to the start of the selected window, so a window opening
/// at 08:07 with a 60-second width still produces buckets on :00 minute
/// boundaries. Output compatibility depends on this alignment.
pub fn bucket_by_interval<'a>(
    samples: &[&'a Sample],
    width_seconds: u32,
) -> BTreeMap<i64, Vec<&'a Sample>> {
    let width = i64::from(width_seconds.max(1));
    let mut buckets: BTreeMap<i64, Vec<&Sample>> = BTreeMap::new();
    for sample in samples {
        let epoch = sample.timestamp.and_utc().timestamp();
        let start = epoch.div_euclid(width) * width;
        buckets.entry(start).or_default().push(sample);
    }
    buckets
}

/// Group one day's samples by hour of day.
pub fn bucket_by_hour<'a>(samples: &[&'a Sample]) -> BTreeMap<u32, Vec<&'a Sample>> {
    let mut buckets: BTreeMap<u32, Vec<&Sample>> = BTreeMap::new();
    for sample in samples {
        buckets
            .entry(sample.timestamp.hour())
            .or_default()
            .push(sample);
    }
    buckets
}

/// Group the whole series by weekday label, Monday first.
///
/// This is a group-by-label, not an interval partition: every Tuesday in
/// the series lands in the same bucket. Weekdays absent from the data keep
/// an empty bucket so downstream output always has exactly 7 rows.
pub fn bucket_by_weekday(series: &Series) -> [Vec<&Sample>; 7] {
    let mut buckets: [Vec<&Sample>; 7] = Default::default();
    for sample in series.samples() {
        buckets[sample.weekday.num_days_from_monday() as usize].push(sample);
    }
    buckets
}
