#![allow(dead_code)] // each test binary uses its own subset

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use kineticandles::api::{Sample, Series};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write;

/// 2023-05-01, a Monday. Offsetting the start day by N picks the Nth
/// weekday label.
pub const BASE_DATE: (i32, u32, u32) = (2023, 5, 1);

pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(BASE_DATE.0, BASE_DATE.1, BASE_DATE.2).unwrap()
}

/// Hourly activity baseline mirroring a plausible wearer: weekday morning
/// and evening peaks, weekend midday peaks.
fn base_activity(hour: u32, is_weekend: bool) -> f64 {
    if is_weekend {
        match hour {
            0..=7 => 10.0,
            8..=10 => 40.0,
            11..=14 => 75.0,
            15..=18 => 65.0,
            19..=22 => 45.0,
            _ => 20.0,
        }
    } else {
        match hour {
            0..=5 => 10.0,
            6..=8 => 70.0,
            9..=11 => 40.0,
            12..=13 => 60.0,
            14..=16 => 35.0,
            17..=18 => 65.0,
            19..=21 => 30.0,
            _ => 15.0,
        }
    }
}

/// Deterministic synthetic accelerometer series: `days` full days starting
/// `start_day_offset` days after [`base_date`], one sample every
/// `step_seconds`, activity in `[0, 100]`.
pub fn synthetic_series(days: u32, start_day_offset: u32, step_seconds: u32, seed: u64) -> Series {
    let mut rng = StdRng::seed_from_u64(seed);
    let step = step_seconds.max(1);
    let mut samples = Vec::new();

    for day in 0..days {
        let date = base_date() + Duration::days(i64::from(start_day_offset + day));
        let is_weekend = date.weekday().num_days_from_monday() >= 5;
        let mut second = 0u32;
        while second < 24 * 3600 {
            let timestamp = date
                .and_hms_opt(second / 3600, (second / 60) % 60, second % 60)
                .unwrap();
            let base = base_activity(second / 3600, is_weekend);
            let jitter: f64 = rng.gen_range(-8.0..8.0);
            let activity = (base + jitter).clamp(0.0, 100.0);
            samples.push(Sample::new(timestamp, activity));
            second += step;
        }
    }

    Series::new(samples)
}

/// A short burst of samples within one hour window, one per `step_seconds`.
pub fn burst(
    date: NaiveDate,
    start_hour: u32,
    end_hour: u32,
    step_seconds: u32,
    seed: u64,
) -> Series {
    let mut rng = StdRng::seed_from_u64(seed);
    let step = step_seconds.max(1);
    let mut samples = Vec::new();
    let mut second = start_hour * 3600;
    while second < end_hour * 3600 {
        let timestamp = date
            .and_hms_opt(second / 3600, (second / 60) % 60, second % 60)
            .unwrap();
        let activity: f64 = rng.gen_range(10.0..90.0);
        samples.push(Sample::new(timestamp, activity));
        second += step;
    }
    Series::new(samples)
}

/// Render a series back to the CSV shape the loader ingests.
pub fn to_csv(series: &Series) -> String {
    let mut out = String::from("timestamp,activity_level\n");
    for sample in series.samples() {
        let _ = writeln!(
            out,
            "{},{}",
            format_timestamp(sample.timestamp),
            sample.activity_level
        );
    }
    out
}

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
