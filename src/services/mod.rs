//! Service layer: bucketing, aggregation, classification, and the view
//! pipeline.
//!
//! Services are pure functions over borrowed input; they never mutate the
//! series and degrade to empty output for degenerate input instead of
//! failing mid-pipeline.

pub mod aggregate;
pub mod bucketing;
pub mod classify;
pub mod kline;
pub mod pipeline;
pub mod resolution;
pub mod window;

pub use aggregate::{hourly_candles, interval_candles, weekly_aggregates};
pub use bucketing::{bucket_by_hour, bucket_by_interval, bucket_by_weekday};
pub use classify::{classify_day, classify_week};
pub use kline::{day_kline, high_res_kline};
pub use pipeline::render_view;
pub use resolution::detect_second_resolution;
pub use window::select_window;

#[cfg(test)]
#[path = "classify_tests.rs"]
mod classify_tests;
