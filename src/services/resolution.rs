//! Data resolution detection.

use crate::models::sample::Series;
use chrono::Timelike;
use rand::Rng;
use std::collections::HashSet;

/// Cap on how many rows the detector inspects, to bound cost on large
/// series.
const SAMPLE_CAP: usize = 1000;

/// Classify a series as second-level (`true`) or minute-level (`false`)
/// resolution.
///
/// Draws a bounded random sample and checks whether any minute-truncated
/// key holds more than one row. Informational only: the result drives
/// hints and labels, never which operations are permitted. An empty series
/// is minute-level by convention.
pub fn detect_second_resolution(series: &Series) -> bool {
    let second_level = detect_with_rng(series, &mut rand::thread_rng());
    log::debug!(
        "data resolution detection: {} resolution",
        if second_level {
            "second-level"
        } else {
            "minute-level"
        }
    );
    second_level
}

pub(crate) fn detect_with_rng<R: Rng + ?Sized>(series: &Series, rng: &mut R) -> bool {
    let samples = series.samples();
    if samples.is_empty() {
        return false;
    }

    let mut seen: HashSet<(chrono::NaiveDate, u32, u32)> = HashSet::new();
    let mut minute_repeats = |sample: &crate::models::sample::Sample| {
        let key = (
            sample.timestamp.date(),
            sample.timestamp.hour(),
            sample.timestamp.minute(),
        );
        !seen.insert(key)
    };

    if samples.len() <= SAMPLE_CAP {
        return samples.iter().any(|s| minute_repeats(s));
    }

    rand::seq::index::sample(rng, samples.len(), SAMPLE_CAP)
        .into_iter()
        .any(|i| minute_repeats(&samples[i]))
}
