//! Static Chart Renderer
//! Exports the comparison chart to a PNG file using plotters.

use chrono::NaiveDate;
use plotters::coord::types::{RangedCoordf64, RangedDate};
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

use crate::data::StationSeries;

const HIGH_COLOR: RGBColor = RGBColor(214, 39, 40);
const LOW_COLOR: RGBColor = RGBColor(31, 119, 180);
const FIRST_FILL: RGBColor = RGBColor(148, 103, 189);
const SECOND_FILL: RGBColor = RGBColor(44, 160, 44);

const FIRST_ALPHA: f64 = 0.9;
const SECOND_ALPHA: f64 = 0.3;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Nothing to draw: both series are empty")]
    EmptySeries,
    #[error("Failed to render chart: {0}")]
    Backend(String),
}

/// Renders the same comparison chart the window shows, as a PNG.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    pub fn render_png(
        first: &StationSeries,
        second: &StationSeries,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let ranges = Self::ranges(first, second).ok_or(RenderError::EmptySeries)?;
        Self::draw(first, second, path, width, height, ranges)
            .map_err(|e| RenderError::Backend(e.to_string()))
    }

    /// Shared axis ranges over both stations, with a little vertical padding.
    fn ranges(
        first: &StationSeries,
        second: &StationSeries,
    ) -> Option<(NaiveDate, NaiveDate, f64, f64)> {
        let mut min_date: Option<NaiveDate> = None;
        let mut max_date: Option<NaiveDate> = None;
        let mut min_temp = f64::INFINITY;
        let mut max_temp = f64::NEG_INFINITY;

        for series in [first, second] {
            for &date in &series.dates {
                min_date = Some(min_date.map_or(date, |d| d.min(date)));
                max_date = Some(max_date.map_or(date, |d| d.max(date)));
            }
            for &low in &series.lows {
                min_temp = min_temp.min(low);
            }
            for &high in &series.highs {
                max_temp = max_temp.max(high);
            }
        }

        let (min_date, max_date) = (min_date?, max_date?);
        if !min_temp.is_finite() || !max_temp.is_finite() {
            return None;
        }
        let pad = ((max_temp - min_temp) * 0.1).max(1.0);
        Some((min_date, max_date, min_temp - pad, max_temp + pad))
    }

    fn draw(
        first: &StationSeries,
        second: &StationSeries,
        path: &Path,
        width: u32,
        height: u32,
        (min_date, max_date, min_temp, max_temp): (NaiveDate, NaiveDate, f64, f64),
    ) -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let title = match (first.year(), second.year()) {
            (Some(y1), Some(y2)) => format!(
                "Daily Highs and Lows: {}, {} and {}, {}",
                first.station, y1, second.station, y2
            ),
            _ => "Daily Highs and Lows".to_string(),
        };

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 28))
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(min_date..max_date, min_temp..max_temp)?;

        chart
            .configure_mesh()
            .y_desc("Temperature (F)")
            .x_labels(8)
            .x_label_formatter(&|d| d.format("%Y-%m-%d").to_string())
            .draw()?;

        Self::draw_station(&mut chart, first, FIRST_FILL, FIRST_ALPHA)?;
        Self::draw_station(&mut chart, second, SECOND_FILL, SECOND_ALPHA)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }

    fn draw_station<DB: DrawingBackend>(
        chart: &mut ChartContext<'_, DB, Cartesian2d<RangedDate<NaiveDate>, RangedCoordf64>>,
        series: &StationSeries,
        fill: RGBColor,
        alpha: f64,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        DB::ErrorType: 'static,
    {
        if series.is_empty() {
            return Ok(());
        }

        // Band between highs and lows: highs left to right, lows back.
        let band: Vec<(NaiveDate, f64)> = series
            .dates
            .iter()
            .zip(series.highs.iter())
            .map(|(&d, &h)| (d, h))
            .chain(
                series
                    .dates
                    .iter()
                    .zip(series.lows.iter())
                    .rev()
                    .map(|(&d, &l)| (d, l)),
            )
            .collect();

        let band_style = fill.mix(alpha).filled();
        let legend_style = band_style;
        chart
            .draw_series(std::iter::once(Polygon::new(band, band_style)))?
            .label(&series.station)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], legend_style));

        chart.draw_series(LineSeries::new(
            series
                .dates
                .iter()
                .zip(series.highs.iter())
                .map(|(&d, &h)| (d, h)),
            HIGH_COLOR.mix(alpha).stroke_width(2),
        ))?;

        chart.draw_series(LineSeries::new(
            series
                .dates
                .iter()
                .zip(series.lows.iter())
                .map(|(&d, &l)| (d, l)),
            LOW_COLOR.mix(alpha).stroke_width(2),
        ))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 7, d).unwrap()
    }

    fn series(station: &str, highs: Vec<f64>, lows: Vec<f64>) -> StationSeries {
        let dates = (1..=highs.len() as u32).map(day).collect();
        StationSeries {
            station: station.to_string(),
            dates,
            highs,
            lows,
        }
    }

    #[test]
    fn ranges_span_both_stations_with_padding() {
        let a = series("A", vec![88.0, 92.0], vec![61.0, 60.0]);
        let b = series("B", vec![70.0, 75.0], vec![40.0, 42.0]);

        let (min_date, max_date, min_temp, max_temp) =
            StaticChartRenderer::ranges(&a, &b).unwrap();
        assert_eq!(min_date, day(1));
        assert_eq!(max_date, day(2));
        assert!(min_temp < 40.0);
        assert!(max_temp > 92.0);
    }

    #[test]
    fn empty_input_has_no_ranges() {
        let empty = StationSeries {
            station: String::new(),
            dates: Vec::new(),
            highs: Vec::new(),
            lows: Vec::new(),
        };
        assert!(StaticChartRenderer::ranges(&empty, &empty).is_none());
    }
}
