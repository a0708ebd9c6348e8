//! Rule-based pattern classification over aggregated candles.

use crate::models::candle::{Candle, WeeklyAggregate};
use serde::{Deserialize, Serialize};

/// Daily movement pattern label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPattern {
    MorningPeak,
    EveningPeak,
    MiddayPeak,
    Bimodal,
    Consistent,
}

impl DayPattern {
    /// Human-readable description shown in the analysis panel.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MorningPeak => {
                "Highest activity in morning hours, gradually decreasing throughout the day."
            }
            Self::EveningPeak => {
                "Activity builds throughout the day, reaching highest levels in evening."
            }
            Self::MiddayPeak => "Activity concentrated during midday hours.",
            Self::Bimodal => "Two distinct activity peaks (morning and evening) with midday lull.",
            Self::Consistent => {
                "Relatively consistent activity levels throughout active hours."
            }
        }
    }
}

/// Weekly movement pattern label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekPattern {
    WeekendWarrior,
    WorkweekActive,
    ConsistentWeekly,
    VariableWeekly,
}

impl WeekPattern {
    pub fn description(&self) -> &'static str {
        match self {
            Self::WeekendWarrior => {
                "Significantly higher activity on weekends compared to weekdays."
            }
            Self::WorkweekActive => {
                "Higher activity during the workweek with less active weekends."
            }
            Self::ConsistentWeekly => {
                "Relatively consistent activity levels throughout the week."
            }
            Self::VariableWeekly => {
                "Activity levels vary significantly across different days of the week."
            }
        }
    }
}

/// Volatility bands over the mean per-hour standard deviation. Thresholds
/// are exclusive lower bounds: exactly 20 is moderate, not high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityLabel {
    High,
    Moderate,
    Low,
}

impl VolatilityLabel {
    pub fn from_volatility(volatility: f64) -> Self {
        if volatility > 20.0 {
            Self::High
        } else if volatility > 10.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "High variability in activity levels throughout the day.",
            Self::Moderate => "Moderate variability in activity levels.",
            Self::Low => "Consistent activity levels with minimal fluctuation.",
        }
    }
}

/// Classification output for one day of hourly candles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAnalysis {
    pub pattern_type: DayPattern,
    pub description: String,
    /// Hour whose candle holds the maximum `max`; first occurrence wins
    /// ties.
    pub peak_hour: u32,
    pub morning_mean: f64,
    pub midday_mean: f64,
    pub evening_mean: f64,
    /// Mean of the per-hour standard deviations.
    pub volatility: f64,
    pub volatility_label: VolatilityLabel,
    pub volatility_description: String,
}

/// Per-day mean entry in the weekly analysis, Monday..Sunday order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMean {
    pub day: String,
    /// 0.0 when the day has no samples.
    pub mean: f64,
    pub sample_count: usize,
}

/// Classification output for the weekday-pooled aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAnalysis {
    pub pattern_type: WeekPattern,
    pub description: String,
    /// `None` when no day has data.
    pub most_active_day: Option<String>,
    pub least_active_day: Option<String>,
    /// Mean over Mon-Fri days that have data; 0.0 when all are absent.
    pub weekday_mean: f64,
    /// Mean over Sat/Sun days that have data; 0.0 when all are absent.
    pub weekend_mean: f64,
    pub per_day_means: Vec<DayMean>,
}

/// Mean of the hourly `mean` values for candles whose hour lies in
/// `[start_hour, end_hour]`. A segment with no candles contributes 0.0.
fn segment_mean(candles: &[Candle], start_hour: u32, end_hour: u32) -> f64 {
    let values: Vec<f64> = candles
        .iter()
        .filter(|c| {
            let h = c.hour();
            h >= start_hour && h <= end_hour
        })
        .map(|c| c.mean)
        .collect();
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Classify one day of hourly candles. Returns `None` for an empty candle
/// list; every other degenerate input degrades to zeroed statistics.
///
/// Decision tree, first match wins:
/// 1. morning strictly greatest        -> morning_peak
/// 2. evening strictly greatest        -> evening_peak
/// 3. midday strictly greatest         -> midday_peak
/// 4. |morning - evening| < 5, morning > midday -> bimodal
/// 5. otherwise                        -> consistent
pub fn classify_day(hourly: &[Candle]) -> Option<DailyAnalysis> {
    if hourly.is_empty() {
        return None;
    }

    let morning = segment_mean(hourly, 6, 11);
    let midday = segment_mean(hourly, 12, 17);
    let evening = segment_mean(hourly, 18, 23);

    let pattern_type = if morning > midday && morning > evening {
        DayPattern::MorningPeak
    } else if evening > morning && evening > midday {
        DayPattern::EveningPeak
    } else if midday > morning && midday > evening {
        DayPattern::MiddayPeak
    } else if (morning - evening).abs() < 5.0 && morning > midday {
        DayPattern::Bimodal
    } else {
        DayPattern::Consistent
    };

    let mut peak_hour = hourly[0].hour();
    let mut peak_max = hourly[0].max;
    for candle in &hourly[1..] {
        if candle.max > peak_max {
            peak_max = candle.max;
            peak_hour = candle.hour();
        }
    }

    let volatility = hourly.iter().map(|c| c.std).sum::<f64>() / hourly.len() as f64;
    let volatility_label = VolatilityLabel::from_volatility(volatility);

    Some(DailyAnalysis {
        pattern_type,
        description: pattern_type.description().to_string(),
        peak_hour,
        morning_mean: morning,
        midday_mean: midday,
        evening_mean: evening,
        volatility,
        volatility_label,
        volatility_description: volatility_label.description().to_string(),
    })
}

fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Sample standard deviation (n-1) of a value set; 0.0 below two values.
fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean_of(values);
    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Classify the weekday-pooled aggregates (Monday..Sunday order expected).
///
/// Days absent from the data are excluded from the weekday/weekend means
/// rather than counted as zero; a side with no data at all reports 0.0.
/// The consistency rule, by contrast, takes the spread over all 7 labels
/// with absent days as 0, matching the reference output.
///
/// Decision tree, first match wins:
/// 1. weekend > weekday * 1.3               -> weekend_warrior
/// 2. weekday > weekend * 1.3               -> workweek_active
/// 3. stddev of the 7 per-day means < 10    -> consistent_weekly
/// 4. otherwise                             -> variable_weekly
pub fn classify_week(aggregates: &[WeeklyAggregate]) -> WeeklyAnalysis {
    let per_day_means: Vec<DayMean> = aggregates
        .iter()
        .map(|a| DayMean {
            day: a.day.clone(),
            mean: if a.has_data() { a.mean } else { 0.0 },
            sample_count: a.sample_count,
        })
        .collect();

    let weekday_values: Vec<f64> = aggregates
        .iter()
        .take(5)
        .filter(|a| a.has_data())
        .map(|a| a.mean)
        .collect();
    let weekend_values: Vec<f64> = aggregates
        .iter()
        .skip(5)
        .filter(|a| a.has_data())
        .map(|a| a.mean)
        .collect();
    let weekday_mean = mean_of(&weekday_values);
    let weekend_mean = mean_of(&weekend_values);

    let mut most_active_day: Option<(&WeeklyAggregate, f64)> = None;
    let mut least_active_day: Option<(&WeeklyAggregate, f64)> = None;
    for aggregate in aggregates.iter().filter(|a| a.has_data()) {
        if most_active_day.map_or(true, |(_, best)| aggregate.mean > best) {
            most_active_day = Some((aggregate, aggregate.mean));
        }
        if least_active_day.map_or(true, |(_, worst)| aggregate.mean < worst) {
            least_active_day = Some((aggregate, aggregate.mean));
        }
    }

    let all_means: Vec<f64> = per_day_means.iter().map(|d| d.mean).collect();
    let pattern_type = if weekend_mean > weekday_mean * 1.3 {
        WeekPattern::WeekendWarrior
    } else if weekday_mean > weekend_mean * 1.3 {
        WeekPattern::WorkweekActive
    } else if sample_std(&all_means) < 10.0 {
        WeekPattern::ConsistentWeekly
    } else {
        WeekPattern::VariableWeekly
    };

    WeeklyAnalysis {
        pattern_type,
        description: pattern_type.description().to_string(),
        most_active_day: most_active_day.map(|(a, _)| a.day.clone()),
        least_active_day: least_active_day.map(|(a, _)| a.day.clone()),
        weekday_mean,
        weekend_mean,
        per_day_means,
    }
}
