//! View configuration passed into each pipeline call.
//!
//! The original application kept current-view state as ambient mutable
//! fields; here it is an explicit immutable value so the pipeline stays
//! trivially testable and reentrant.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which chart the pipeline should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Hourly candles for the selected date.
    Day,
    /// Weekday-pooled candles, Monday through Sunday.
    Week,
    /// Interval candles over a bounded hour window of the selected date.
    HighRes,
}

/// Candle width for the high-resolution view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleInterval {
    Sec15,
    Sec30,
    Min1,
    Min5,
    /// Caller-supplied width in seconds, always positive.
    Custom(u32),
}

impl CandleInterval {
    /// Caller-supplied interval; `None` for zero seconds.
    pub fn custom(seconds: u32) -> Option<Self> {
        if seconds == 0 {
            return None;
        }
        match seconds {
            15 => Some(Self::Sec15),
            30 => Some(Self::Sec30),
            60 => Some(Self::Min1),
            300 => Some(Self::Min5),
            other => Some(Self::Custom(other)),
        }
    }

    /// Bucket width in seconds.
    pub fn seconds(&self) -> u32 {
        match self {
            Self::Sec15 => 15,
            Self::Sec30 => 30,
            Self::Min1 => 60,
            Self::Min5 => 300,
            Self::Custom(seconds) => (*seconds).max(1),
        }
    }

    /// Display label for interval selectors and chart titles.
    pub fn label(&self) -> String {
        match self {
            Self::Sec15 => "15 seconds".to_string(),
            Self::Sec30 => "30 seconds".to_string(),
            Self::Min1 => "1 minute".to_string(),
            Self::Min5 => "5 minutes".to_string(),
            Self::Custom(seconds) => {
                if seconds % 60 == 0 {
                    format!("{} minutes", seconds / 60)
                } else {
                    format!("{} seconds", seconds)
                }
            }
        }
    }

    /// The preset intervals offered by the interval selector, in order.
    pub fn presets() -> &'static [CandleInterval] {
        &[Self::Sec15, Self::Sec30, Self::Min1, Self::Min5]
    }
}

impl Default for CandleInterval {
    fn default() -> Self {
        Self::Min1
    }
}

/// A validated [start_hour, end_hour) window for the high-resolution view.
///
/// The 4-hour cap bounds the candle count a renderer has to draw. Violations
/// fail construction with [`Error::InvalidWindow`]; the window is never
/// silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    start_hour: u32,
    end_hour: u32,
}

impl HourWindow {
    pub const MAX_SPAN_HOURS: u32 = 4;

    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        if start_hour > 23 {
            return Err(Error::invalid_window("Start hour must be between 0 and 23"));
        }
        if end_hour > 24 {
            return Err(Error::invalid_window("End hour must be between 0 and 24"));
        }
        if end_hour <= start_hour || end_hour - start_hour > Self::MAX_SPAN_HOURS {
            return Err(Error::invalid_window(
                "Time window must be between 1 and 4 hours",
            ));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Inclusive of the start hour, exclusive of the end hour.
    pub fn contains_hour(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

impl Default for HourWindow {
    /// The original application's default morning window.
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 10,
        }
    }
}

/// Immutable configuration for one pipeline call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub mode: ViewMode,
    /// Only consulted in high-resolution mode.
    pub window: HourWindow,
    /// Only consulted in high-resolution mode.
    pub interval: CandleInterval,
}

impl ViewConfig {
    pub fn new(mode: ViewMode) -> Self {
        Self {
            mode,
            window: HourWindow::default(),
            interval: CandleInterval::default(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(ViewMode::Day)
    }
}
