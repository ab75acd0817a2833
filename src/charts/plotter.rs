//! Chart Plotter Module
//! Draws the interactive highs/lows comparison using egui_plot.

use chrono::{Datelike, NaiveDate};
use egui::{Color32, Stroke};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Polygon};

use crate::data::StationSeries;

pub const HIGH_COLOR: Color32 = Color32::from_rgb(214, 39, 40); // Red
pub const LOW_COLOR: Color32 = Color32::from_rgb(31, 119, 180); // Blue

/// Band fills: purple for the first station, green for the second.
pub const FIRST_FILL: Color32 = Color32::from_rgb(148, 103, 189);
pub const SECOND_FILL: Color32 = Color32::from_rgb(44, 160, 44);

/// The first station draws near-opaque, the second stays translucent so both
/// remain readable where they overlap.
const FIRST_ALPHA: f32 = 0.9;
const SECOND_ALPHA: f32 = 0.3;

/// Draws the two-station comparison chart.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Map a date onto the plot's x-axis.
    pub fn date_to_x(date: NaiveDate) -> f64 {
        date.num_days_from_ce() as f64
    }

    /// Inverse of [`Self::date_to_x`], for axis labels.
    pub fn x_to_date(x: f64) -> Option<NaiveDate> {
        NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
    }

    /// Draw both stations into one plot: red high line, blue low line and a
    /// shaded band between them per station, legend in the lower right.
    pub fn draw_comparison(ui: &mut egui::Ui, first: &StationSeries, second: &StationSeries) {
        Plot::new("daily_highs_lows")
            .legend(Legend::default().position(Corner::RightBottom))
            .y_axis_label("Temperature (F)")
            .x_axis_formatter(|mark, _range| {
                Self::x_to_date(mark.value)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            })
            .label_formatter(|name, point| {
                let date = Self::x_to_date(point.x)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                if name.is_empty() {
                    format!("{date}\n{:.1} F", point.y)
                } else {
                    format!("{name}\n{date}\n{:.1} F", point.y)
                }
            })
            .show(ui, |plot_ui| {
                Self::draw_station(plot_ui, first, FIRST_FILL, FIRST_ALPHA);
                Self::draw_station(plot_ui, second, SECOND_FILL, SECOND_ALPHA);
            });
    }

    fn draw_station(
        plot_ui: &mut egui_plot::PlotUi,
        series: &StationSeries,
        fill: Color32,
        alpha: f32,
    ) {
        if series.is_empty() {
            return;
        }

        // Band between highs and lows: highs left to right, lows back.
        let band: PlotPoints = series
            .dates
            .iter()
            .zip(series.highs.iter())
            .map(|(&d, &h)| [Self::date_to_x(d), h])
            .chain(
                series
                    .dates
                    .iter()
                    .zip(series.lows.iter())
                    .rev()
                    .map(|(&d, &l)| [Self::date_to_x(d), l]),
            )
            .collect();

        plot_ui.polygon(
            Polygon::new(band)
                .fill_color(fill.gamma_multiply(alpha))
                .stroke(Stroke::NONE)
                .name(&series.station),
        );

        let highs: PlotPoints = series
            .dates
            .iter()
            .zip(series.highs.iter())
            .map(|(&d, &h)| [Self::date_to_x(d), h])
            .collect();
        plot_ui.line(
            Line::new(highs)
                .color(HIGH_COLOR.gamma_multiply(alpha))
                .width(1.5),
        );

        let lows: PlotPoints = series
            .dates
            .iter()
            .zip(series.lows.iter())
            .map(|(&d, &l)| [Self::date_to_x(d), l])
            .collect();
        plot_ui.line(
            Line::new(lows)
                .color(LOW_COLOR.gamma_multiply(alpha))
                .width(1.5),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_axis_mapping_round_trips() {
        let date = NaiveDate::from_ymd_opt(2021, 7, 15).unwrap();
        assert_eq!(ChartPlotter::x_to_date(ChartPlotter::date_to_x(date)), Some(date));
    }

    #[test]
    fn consecutive_days_are_one_unit_apart() {
        let a = NaiveDate::from_ymd_opt(2021, 7, 15).unwrap();
        let b = NaiveDate::from_ymd_opt(2021, 7, 16).unwrap();
        assert_eq!(ChartPlotter::date_to_x(b) - ChartPlotter::date_to_x(a), 1.0);
    }
}
