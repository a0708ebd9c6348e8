//! Candle aggregation over time buckets.

use crate::models::candle::{Candle, WeeklyAggregate};
use crate::models::sample::{Sample, Series, DAYS_OF_WEEK};
use crate::services::bucketing::{bucket_by_hour, bucket_by_weekday};
use chrono::{DateTime, NaiveDateTime, Timelike};
use std::collections::BTreeMap;

/// Minimum samples for an interval bucket to form a candle: a single point
/// cannot make a meaningful open/close pair.
pub const MIN_SAMPLES_PER_INTERVAL_CANDLE: usize = 2;

/// Order-independent summary statistics for one bucket.
struct BucketStats {
    max: f64,
    min: f64,
    mean: f64,
    std: f64,
}

/// Mean, extremes, and sample standard deviation (n-1) of a bucket's
/// activity levels. Single-sample buckets report a 0.0 std so downstream
/// means stay NaN-free.
fn bucket_stats(samples: &[&Sample]) -> BucketStats {
    let count = samples.len();
    if count == 0 {
        return BucketStats {
            max: 0.0,
            min: 0.0,
            mean: 0.0,
            std: 0.0,
        };
    }

    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    let mut sum = 0.0;
    for sample in samples {
        let v = sample.activity_level;
        max = max.max(v);
        min = min.min(v);
        sum += v;
    }
    let mean = sum / count as f64;

    let std = if count > 1 {
        let sum_sq: f64 = samples
            .iter()
            .map(|s| {
                let diff = s.activity_level - mean;
                diff * diff
            })
            .sum();
        (sum_sq / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    BucketStats {
        max,
        min,
        mean,
        std,
    }
}

fn minutes_since_midnight(dt: NaiveDateTime) -> f64 {
    f64::from(dt.hour() * 60 + dt.minute()) + f64::from(dt.second()) / 60.0
}

/// Hourly candles for one day's samples: every hour 0-23 holding at least
/// one sample emits a candle. Single-sample hours produce a degenerate
/// candle with first == last == max == min.
pub fn hourly_candles(day_samples: &[&Sample]) -> Vec<Candle> {
    bucket_by_hour(day_samples)
        .into_iter()
        .map(|(hour, group)| {
            let stats = bucket_stats(&group);
            let first = group[0];
            let last = group[group.len() - 1];
            let bucket_start = first
                .timestamp
                .date()
                .and_hms_opt(hour, 0, 0)
                .unwrap_or(first.timestamp);
            Candle {
                bucket_start,
                time_index: f64::from(hour * 60),
                time_label: format!("{:02}:00", hour),
                first: first.activity_level,
                last: last.activity_level,
                max: stats.max,
                min: stats.min,
                mean: stats.mean,
                std: stats.std,
                sample_count: group.len(),
            }
        })
        .collect()
}

/// Candles for epoch-aligned interval buckets. Buckets with fewer than
/// [`MIN_SAMPLES_PER_INTERVAL_CANDLE`] samples are dropped silently; they
/// simply do not appear as a rendered candle.
pub fn interval_candles(
    buckets: &BTreeMap<i64, Vec<&Sample>>,
    interval_seconds: u32,
) -> Vec<Candle> {
    buckets
        .iter()
        .filter(|(_, group)| group.len() >= MIN_SAMPLES_PER_INTERVAL_CANDLE)
        .map(|(&start, group)| {
            let bucket_start = DateTime::from_timestamp(start, 0)
                .unwrap_or(DateTime::UNIX_EPOCH)
                .naive_utc();
            let time_label = if interval_seconds < 60 {
                bucket_start.format("%H:%M:%S").to_string()
            } else {
                bucket_start.format("%H:%M").to_string()
            };
            let stats = bucket_stats(group);
            Candle {
                bucket_start,
                time_index: minutes_since_midnight(bucket_start),
                time_label,
                first: group[0].activity_level,
                last: group[group.len() - 1].activity_level,
                max: stats.max,
                min: stats.min,
                mean: stats.mean,
                std: stats.std,
                sample_count: group.len(),
            }
        })
        .collect()
}

/// Weekday-pooled aggregates over the whole series, always 7 records in
/// Monday..Sunday order. `first` and `last` are both the pooled mean;
/// absent weekdays emit a zeroed record with `sample_count == 0`.
pub fn weekly_aggregates(series: &Series) -> Vec<WeeklyAggregate> {
    bucket_by_weekday(series)
        .iter()
        .zip(DAYS_OF_WEEK)
        .map(|(group, day)| {
            let stats = bucket_stats(group);
            WeeklyAggregate {
                day: day.to_string(),
                first: stats.mean,
                last: stats.mean,
                max: stats.max,
                min: stats.min,
                mean: stats.mean,
                std: stats.std,
                sample_count: group.len(),
            }
        })
        .collect()
}
