#[cfg(test)]
mod tests {
    use crate::models::candle::{Candle, WeeklyAggregate};
    use crate::models::sample::DAYS_OF_WEEK;
    use crate::services::classify::{
        classify_day, classify_week, DayPattern, VolatilityLabel, WeekPattern,
    };
    use chrono::NaiveDate;

    fn hour_candle(hour: u32, mean: f64, max: f64, std: f64) -> Candle {
        Candle {
            bucket_start: NaiveDate::from_ymd_opt(2023, 5, 1)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            time_index: f64::from(hour * 60),
            time_label: format!("{:02}:00", hour),
            first: mean,
            last: mean,
            max,
            min: mean.min(max),
            mean,
            std,
            sample_count: 4,
        }
    }

    /// One candle per segment hour with the given segment means.
    fn segment_candles(morning: f64, midday: f64, evening: f64) -> Vec<Candle> {
        vec![
            hour_candle(8, morning, morning, 0.0),
            hour_candle(14, midday, midday, 0.0),
            hour_candle(20, evening, evening, 0.0),
        ]
    }

    #[test]
    fn test_classify_day_empty_is_none() {
        assert!(classify_day(&[]).is_none());
    }

    #[test]
    fn test_morning_peak() {
        let analysis = classify_day(&segment_candles(70.0, 40.0, 30.0)).unwrap();
        assert_eq!(analysis.pattern_type, DayPattern::MorningPeak);
        assert!((analysis.morning_mean - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_evening_peak() {
        let analysis = classify_day(&segment_candles(30.0, 40.0, 70.0)).unwrap();
        assert_eq!(analysis.pattern_type, DayPattern::EveningPeak);
    }

    #[test]
    fn test_midday_peak() {
        let analysis = classify_day(&segment_candles(30.0, 70.0, 40.0)).unwrap();
        assert_eq!(analysis.pattern_type, DayPattern::MiddayPeak);
    }

    #[test]
    fn test_bimodal_tie_break_over_morning_peak() {
        // morning == evening == 50: rules 1-3 need a strict maximum and do
        // not fire, rule 4 does.
        let analysis = classify_day(&segment_candles(50.0, 30.0, 50.0)).unwrap();
        assert_eq!(analysis.pattern_type, DayPattern::Bimodal);
    }

    #[test]
    fn test_consistent_fallback() {
        let analysis = classify_day(&segment_candles(50.0, 50.0, 50.0)).unwrap();
        assert_eq!(analysis.pattern_type, DayPattern::Consistent);
    }

    #[test]
    fn test_missing_segment_contributes_zero() {
        // only a morning candle: midday/evening means are 0, morning wins
        let candles = vec![hour_candle(7, 60.0, 60.0, 0.0)];
        let analysis = classify_day(&candles).unwrap();
        assert_eq!(analysis.midday_mean, 0.0);
        assert_eq!(analysis.evening_mean, 0.0);
        assert_eq!(analysis.pattern_type, DayPattern::MorningPeak);
    }

    #[test]
    fn test_peak_hour_first_occurrence_wins_ties() {
        let candles = vec![
            hour_candle(6, 10.0, 80.0, 0.0),
            hour_candle(9, 10.0, 80.0, 0.0),
            hour_candle(12, 10.0, 40.0, 0.0),
        ];
        let analysis = classify_day(&candles).unwrap();
        assert_eq!(analysis.peak_hour, 6);
    }

    #[test]
    fn test_volatility_thresholds_exclusive() {
        assert_eq!(
            VolatilityLabel::from_volatility(20.0),
            VolatilityLabel::Moderate
        );
        assert_eq!(
            VolatilityLabel::from_volatility(20.1),
            VolatilityLabel::High
        );
        assert_eq!(
            VolatilityLabel::from_volatility(10.0),
            VolatilityLabel::Low
        );
        assert_eq!(
            VolatilityLabel::from_volatility(10.1),
            VolatilityLabel::Moderate
        );
    }

    #[test]
    fn test_volatility_is_mean_of_hourly_std() {
        let candles = vec![
            hour_candle(8, 50.0, 50.0, 12.0),
            hour_candle(9, 50.0, 50.0, 24.0),
        ];
        let analysis = classify_day(&candles).unwrap();
        assert!((analysis.volatility - 18.0).abs() < 1e-9);
        assert_eq!(analysis.volatility_label, VolatilityLabel::Moderate);
    }

    fn week(means: [Option<f64>; 7]) -> Vec<WeeklyAggregate> {
        means
            .iter()
            .zip(DAYS_OF_WEEK)
            .map(|(mean, day)| WeeklyAggregate {
                day: day.to_string(),
                first: mean.unwrap_or(0.0),
                last: mean.unwrap_or(0.0),
                max: mean.unwrap_or(0.0),
                min: mean.unwrap_or(0.0),
                mean: mean.unwrap_or(0.0),
                std: 0.0,
                sample_count: if mean.is_some() { 10 } else { 0 },
            })
            .collect()
    }

    #[test]
    fn test_weekend_warrior_reference_vector() {
        let aggregates = week([
            Some(20.0),
            Some(22.0),
            Some(19.0),
            Some(21.0),
            Some(20.0),
            Some(40.0),
            Some(42.0),
        ]);
        let analysis = classify_week(&aggregates);
        assert!((analysis.weekday_mean - 20.4).abs() < 1e-9);
        assert!((analysis.weekend_mean - 41.0).abs() < 1e-9);
        assert_eq!(analysis.pattern_type, WeekPattern::WeekendWarrior);
        assert_eq!(analysis.most_active_day.as_deref(), Some("Sunday"));
        assert_eq!(analysis.least_active_day.as_deref(), Some("Wednesday"));
    }

    #[test]
    fn test_workweek_active() {
        let aggregates = week([
            Some(50.0),
            Some(52.0),
            Some(49.0),
            Some(51.0),
            Some(50.0),
            Some(20.0),
            Some(22.0),
        ]);
        let analysis = classify_week(&aggregates);
        assert_eq!(analysis.pattern_type, WeekPattern::WorkweekActive);
    }

    #[test]
    fn test_consistent_weekly() {
        let aggregates = week([
            Some(30.0),
            Some(32.0),
            Some(29.0),
            Some(31.0),
            Some(30.0),
            Some(33.0),
            Some(28.0),
        ]);
        let analysis = classify_week(&aggregates);
        assert_eq!(analysis.pattern_type, WeekPattern::ConsistentWeekly);
    }

    #[test]
    fn test_variable_weekly() {
        let aggregates = week([
            Some(10.0),
            Some(60.0),
            Some(15.0),
            Some(55.0),
            Some(20.0),
            Some(50.0),
            Some(25.0),
        ]);
        let analysis = classify_week(&aggregates);
        assert_eq!(analysis.pattern_type, WeekPattern::VariableWeekly);
    }

    #[test]
    fn test_absent_days_excluded_from_side_means() {
        // only Saturday has data: weekday mean must be 0, not dragged down
        // by absent-day zeros, and the weekend mean sees only Saturday.
        let aggregates = week([None, None, None, None, None, Some(40.0), None]);
        let analysis = classify_week(&aggregates);
        assert_eq!(analysis.weekday_mean, 0.0);
        assert!((analysis.weekend_mean - 40.0).abs() < 1e-9);
        assert_eq!(analysis.pattern_type, WeekPattern::WeekendWarrior);
        assert_eq!(analysis.most_active_day.as_deref(), Some("Saturday"));
        assert_eq!(analysis.least_active_day.as_deref(), Some("Saturday"));
    }

    #[test]
    fn test_all_absent_days_yield_none_extremes() {
        let aggregates = week([None; 7]);
        let analysis = classify_week(&aggregates);
        assert_eq!(analysis.weekday_mean, 0.0);
        assert_eq!(analysis.weekend_mean, 0.0);
        assert!(analysis.most_active_day.is_none());
        assert!(analysis.least_active_day.is_none());
        assert_eq!(analysis.pattern_type, WeekPattern::ConsistentWeekly);
        assert_eq!(analysis.per_day_means.len(), 7);
    }

    #[test]
    fn test_most_active_tie_first_occurrence() {
        let aggregates = week([
            Some(40.0),
            Some(40.0),
            Some(30.0),
            Some(30.0),
            Some(30.0),
            Some(30.0),
            Some(30.0),
        ]);
        let analysis = classify_week(&aggregates);
        assert_eq!(analysis.most_active_day.as_deref(), Some("Monday"));
        assert_eq!(analysis.least_active_day.as_deref(), Some("Wednesday"));
    }
}
