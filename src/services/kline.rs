//! K-line overlay: the moving-average series drawn across a candle
//! sequence. The rendering layer consumes (time_index, value) pairs.

use crate::models::candle::Candle;

/// Minimum candles for the day-view overlay to be meaningful.
const DAY_MIN_CANDLES: usize = 3;
/// Fixed rolling window for the day view, in candles (hours).
const DAY_WINDOW: usize = 3;
/// Minimum candles for the high-resolution overlay.
const HIGH_RES_MIN_CANDLES: usize = 5;

/// Trailing rolling mean with a minimum period of one: entry `i` averages
/// the last `window` values up to and including `i`, or fewer at the start.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

fn overlay(candles: &[Candle], window: usize) -> Vec<(f64, f64)> {
    let lasts: Vec<f64> = candles.iter().map(|c| c.last).collect();
    candles
        .iter()
        .map(|c| c.time_index)
        .zip(rolling_mean(&lasts, window))
        .collect()
}

/// 3-hour moving average of hourly closes; empty below 3 candles.
pub fn day_kline(candles: &[Candle]) -> Vec<(f64, f64)> {
    if candles.len() < DAY_MIN_CANDLES {
        return Vec::new();
    }
    overlay(candles, DAY_WINDOW)
}

/// Adaptive moving average for the high-resolution view: window
/// `max(5, n / 20)` candles; empty below 5 candles.
pub fn high_res_kline(candles: &[Candle]) -> Vec<(f64, f64)> {
    if candles.len() < HIGH_RES_MIN_CANDLES {
        return Vec::new();
    }
    let window = (candles.len() / 20).max(HIGH_RES_MIN_CANDLES);
    overlay(candles, window)
}
