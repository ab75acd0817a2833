//! Station Series Module
//! Extracts (date, high, low) observations from a loaded weather DataFrame.

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

use crate::data::LoaderError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered daily observations for one station.
///
/// `dates`, `highs` and `lows` always have the same length: a row with a
/// missing or unparsable field is dropped from all three at once.
#[derive(Debug, Clone, PartialEq)]
pub struct StationSeries {
    pub station: String,
    pub dates: Vec<NaiveDate>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
}

impl StationSeries {
    /// Extract a series from a DataFrame whose required columns are present.
    ///
    /// Rows with a missing/non-numeric temperature or an unparsable date are
    /// skipped with a warning on stdout; extraction continues.
    pub fn extract(df: &DataFrame) -> Result<Self, LoaderError> {
        let dates = df.column("DATE")?.cast(&DataType::String)?;
        let dates = dates.str()?;
        let names = df.column("NAME")?.cast(&DataType::String)?;
        let names = names.str()?;
        let highs = df.column("TMAX")?.cast(&DataType::Float64)?;
        let highs = highs.f64()?;
        let lows = df.column("TMIN")?.cast(&DataType::Float64)?;
        let lows = lows.f64()?;

        let mut series = Self {
            station: String::new(),
            dates: Vec::with_capacity(df.height()),
            highs: Vec::with_capacity(df.height()),
            lows: Vec::with_capacity(df.height()),
        };

        for i in 0..df.height() {
            let station = names.get(i).unwrap_or("Unknown station");
            // Station exports repeat the name on every row; keep the last one
            // seen as the label for the whole series.
            series.station = station.to_string();

            let raw_date = dates.get(i).unwrap_or_default();
            let date = match NaiveDate::parse_from_str(raw_date, DATE_FORMAT) {
                Ok(date) => date,
                Err(_) => {
                    println!("{station} has an invalid date \"{raw_date}\".");
                    continue;
                }
            };

            match (highs.get(i), lows.get(i)) {
                (Some(high), Some(low)) => series.push(date, high, low),
                _ => println!("{station} is missing data for {date}."),
            }
        }

        Ok(series)
    }

    fn push(&mut self, date: NaiveDate, high: f64, low: f64) {
        self.dates.push(date);
        self.highs.push(high);
        self.lows.push(low);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Year of the first observation, for chart titles.
    pub fn year(&self) -> Option<i32> {
        self.dates.first().map(|d| d.year())
    }

    /// Two submissions count as duplicates when their high-temperature
    /// sequences are element-wise identical.
    pub fn is_duplicate_of(&self, other: &StationSeries) -> bool {
        self.highs == other.highs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn sample_df() -> DataFrame {
        df!(
            "NAME" => ["STATION A", "STATION A", "STATION A", "STATION A"],
            "DATE" => ["2021-07-01", "2021-07-02", "2021-07-03", "2021-07-04"],
            "TMAX" => [Some(88.0), None, Some(91.0), Some(90.0)],
            "TMIN" => [Some(61.0), Some(60.0), None, Some(62.0)],
        )
        .unwrap()
    }

    #[test]
    fn rows_with_missing_temperatures_are_skipped_whole() {
        let series = StationSeries::extract(&sample_df()).unwrap();
        // Rows 2 and 3 each miss one temperature and drop out entirely.
        assert_eq!(series.len(), 2);
        assert_eq!(series.dates.len(), series.highs.len());
        assert_eq!(series.highs.len(), series.lows.len());
        assert_eq!(series.highs, vec![88.0, 90.0]);
        assert_eq!(series.lows, vec![61.0, 62.0]);
        assert_eq!(series.station, "STATION A");
    }

    #[test]
    fn unparsable_date_skips_the_row() {
        let df = df!(
            "NAME" => ["STATION B", "STATION B"],
            "DATE" => ["not-a-date", "2021-07-02"],
            "TMAX" => [80.0, 82.0],
            "TMIN" => [55.0, 56.0],
        )
        .unwrap();

        let series = StationSeries::extract(&df).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(
            series.dates,
            vec![NaiveDate::from_ymd_opt(2021, 7, 2).unwrap()]
        );
    }

    #[test]
    fn identical_high_sequences_are_duplicates() {
        let first = StationSeries::extract(&sample_df()).unwrap();
        let mut second = first.clone();
        second.station = "STATION B".to_string();
        assert!(first.is_duplicate_of(&second));

        second.highs[0] += 1.0;
        assert!(!first.is_duplicate_of(&second));
    }

    #[test]
    fn fixture_files_extract_cleanly() {
        use crate::data::WeatherFile;
        use std::path::Path;

        let a = WeatherFile::load(Path::new("tests/data/station_a.csv")).unwrap();
        let b = WeatherFile::load(Path::new("tests/data/station_b.csv")).unwrap();
        let first = StationSeries::extract(a.dataframe()).unwrap();
        let second = StationSeries::extract(b.dataframe()).unwrap();

        // station_a has one row with a blank TMAX.
        assert_eq!(first.len(), 4);
        assert_eq!(second.len(), 5);
        assert_eq!(first.station, "STATION A");
        assert!(!first.is_duplicate_of(&second));
    }

    #[test]
    fn year_comes_from_first_observation() {
        let series = StationSeries::extract(&sample_df()).unwrap();
        assert_eq!(series.year(), Some(2021));
    }
}
