//! Public API surface.
//!
//! This file consolidates the types and entry points a front end needs, so
//! callers can use `kineticandles::api::*` without tracking internal module
//! layout.

pub use crate::error::Error;
pub use crate::error::Result;

pub use crate::loader::load_csv;
pub use crate::loader::load_from_reader;
pub use crate::loader::COLUMN_ACTIVITY;
pub use crate::loader::COLUMN_TIMESTAMP;

pub use crate::models::candle::Candle;
pub use crate::models::candle::WeeklyAggregate;
pub use crate::models::day_index::DayIndex;
pub use crate::models::sample::day_name;
pub use crate::models::sample::weekday_from_name;
pub use crate::models::sample::Sample;
pub use crate::models::sample::Series;
pub use crate::models::sample::DAYS_OF_WEEK;
pub use crate::models::view::CandleInterval;
pub use crate::models::view::HourWindow;
pub use crate::models::view::ViewConfig;
pub use crate::models::view::ViewMode;

pub use crate::services::classify::classify_day;
pub use crate::services::classify::classify_week;
pub use crate::services::classify::DailyAnalysis;
pub use crate::services::classify::DayMean;
pub use crate::services::classify::DayPattern;
pub use crate::services::classify::VolatilityLabel;
pub use crate::services::classify::WeekPattern;
pub use crate::services::classify::WeeklyAnalysis;
pub use crate::services::kline::day_kline;
pub use crate::services::kline::high_res_kline;
pub use crate::services::pipeline::analyze_day;
pub use crate::services::pipeline::analyze_week;
pub use crate::services::pipeline::render_view;
pub use crate::services::pipeline::ViewData;
pub use crate::services::resolution::detect_second_resolution;
