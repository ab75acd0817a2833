//! Summary Calculator Module
//! Descriptive figures for a station series, shown in the side panel.

use chrono::NaiveDate;

use crate::data::StationSeries;

/// Descriptive summary for a single station.
#[derive(Debug, Clone)]
pub struct StationSummary {
    pub station: String,
    pub count: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub mean_high: f64,
    pub mean_low: f64,
    pub record_high: f64,
    pub record_high_date: NaiveDate,
    pub record_low: f64,
    pub record_low_date: NaiveDate,
}

/// Computes per-station descriptive statistics.
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// Summarize a series. Returns `None` when no observations survived
    /// extraction.
    pub fn summarize(series: &StationSeries) -> Option<StationSummary> {
        let n = series.len();
        let first_date = *series.dates.first()?;
        let last_date = *series.dates.last()?;

        let mean_high = series.highs.iter().sum::<f64>() / n as f64;
        let mean_low = series.lows.iter().sum::<f64>() / n as f64;

        let (high_idx, record_high) = Self::argmax(&series.highs)?;
        let (low_idx, record_low) = Self::argmin(&series.lows)?;

        Some(StationSummary {
            station: series.station.clone(),
            count: n,
            first_date,
            last_date,
            mean_high,
            mean_low,
            record_high,
            record_high_date: series.dates[high_idx],
            record_low,
            record_low_date: series.dates[low_idx],
        })
    }

    fn argmax(values: &[f64]) -> Option<(usize, f64)> {
        values
            .iter()
            .copied()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    fn argmin(values: &[f64]) -> Option<(usize, f64)> {
        values
            .iter()
            .copied()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 7, d).unwrap()
    }

    fn sample_series() -> StationSeries {
        StationSeries {
            station: "STATION A".to_string(),
            dates: vec![day(1), day(2), day(3)],
            highs: vec![88.0, 92.0, 90.0],
            lows: vec![61.0, 60.0, 64.0],
        }
    }

    #[test]
    fn summary_matches_direct_computation() {
        let summary = SummaryCalculator::summarize(&sample_series()).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.first_date, day(1));
        assert_eq!(summary.last_date, day(3));
        assert!((summary.mean_high - 90.0).abs() < 1e-9);
        assert!((summary.mean_low - (185.0 / 3.0)).abs() < 1e-9);
        assert_eq!(summary.record_high, 92.0);
        assert_eq!(summary.record_high_date, day(2));
        assert_eq!(summary.record_low, 60.0);
        assert_eq!(summary.record_low_date, day(2));
    }

    #[test]
    fn empty_series_has_no_summary() {
        let empty = StationSeries {
            station: String::new(),
            dates: Vec::new(),
            highs: Vec::new(),
            lows: Vec::new(),
        };
        assert!(SummaryCalculator::summarize(&empty).is_none());
    }
}
