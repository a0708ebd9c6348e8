//! The view pipeline: one pure call from series + configuration to the
//! records a renderer draws.

use crate::models::candle::{Candle, WeeklyAggregate};
use crate::models::day_index::DayIndex;
use crate::models::sample::Series;
use crate::models::view::{ViewConfig, ViewMode};
use crate::services::aggregate::{hourly_candles, interval_candles, weekly_aggregates};
use crate::services::bucketing::bucket_by_interval;
use crate::services::classify::{classify_day, classify_week, DailyAnalysis, WeeklyAnalysis};
use crate::services::window::select_window;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs for one view. Empty candle lists are the
/// valid "no data" state; callers show a placeholder instead of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewData {
    Day {
        /// `None` when the series holds no dates.
        date: Option<NaiveDate>,
        candles: Vec<Candle>,
        analysis: Option<DailyAnalysis>,
    },
    Week {
        /// Always exactly 7 records, Monday..Sunday.
        aggregates: Vec<WeeklyAggregate>,
        analysis: WeeklyAnalysis,
    },
    HighRes {
        date: Option<NaiveDate>,
        start_hour: u32,
        end_hour: u32,
        interval_seconds: u32,
        /// The original shows no pattern analysis in this mode.
        candles: Vec<Candle>,
    },
}

impl ViewData {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Day { candles, .. } | Self::HighRes { candles, .. } => candles.is_empty(),
            Self::Week { aggregates, .. } => aggregates.iter().all(|a| !a.has_data()),
        }
    }
}

/// Run the full bucket -> aggregate -> classify pipeline for one view.
///
/// Total over all inputs: degenerate series, empty windows, and buckets
/// failing the minimum-sample policy all degrade to empty collections and
/// `None` analyses, never to an error. The call does not mutate the series
/// or the day index, so it is safe to repeat and to run on copies from
/// multiple threads.
pub fn render_view(series: &Series, day_index: &DayIndex, config: &ViewConfig) -> ViewData {
    match config.mode {
        ViewMode::Day => {
            let date = day_index.current();
            let candles = date
                .map(|d| hourly_candles(&series.for_date(d)))
                .unwrap_or_default();
            let analysis = classify_day(&candles);
            log::debug!(
                "day view: {} candles for {:?}",
                candles.len(),
                date
            );
            ViewData::Day {
                date,
                candles,
                analysis,
            }
        }
        ViewMode::Week => {
            let aggregates = weekly_aggregates(series);
            let analysis = classify_week(&aggregates);
            ViewData::Week {
                aggregates,
                analysis,
            }
        }
        ViewMode::HighRes => {
            let date = day_index.current();
            let interval_seconds = config.interval.seconds();
            let candles = date
                .map(|d| {
                    let samples = select_window(series, d, config.window);
                    let buckets = bucket_by_interval(&samples, interval_seconds);
                    interval_candles(&buckets, interval_seconds)
                })
                .unwrap_or_default();
            log::debug!(
                "high-res view: {} candles at {}s for {:?}",
                candles.len(),
                interval_seconds,
                date
            );
            ViewData::HighRes {
                date,
                start_hour: config.window.start_hour(),
                end_hour: config.window.end_hour(),
                interval_seconds,
                candles,
            }
        }
    }
}

/// Weekly analysis over the whole series without building a view.
pub fn analyze_week(series: &Series) -> WeeklyAnalysis {
    classify_week(&weekly_aggregates(series))
}

/// Daily analysis for one date without building a view.
pub fn analyze_day(series: &Series, date: NaiveDate) -> Option<DailyAnalysis> {
    classify_day(&hourly_candles(&series.for_date(date)))
}
