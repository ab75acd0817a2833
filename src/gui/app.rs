//! Tempview Main Application
//! Main window with the summary panel and the comparison chart.

use egui::{RichText, SidePanel};

use crate::charts::{ChartPlotter, StaticChartRenderer};
use crate::data::StationSeries;
use crate::gui::{SummaryAction, SummaryPanel};
use crate::stats::{StationSummary, SummaryCalculator};

/// Main application window.
pub struct WeatherApp {
    first: StationSeries,
    second: StationSeries,
    summaries: Vec<StationSummary>,
    panel: SummaryPanel,
    title: String,
}

impl WeatherApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        first: StationSeries,
        second: StationSeries,
    ) -> Self {
        let summaries = [&first, &second]
            .into_iter()
            .filter_map(SummaryCalculator::summarize)
            .collect();
        let title = Self::chart_title(&first, &second);

        Self {
            first,
            second,
            summaries,
            panel: SummaryPanel::new(),
            title,
        }
    }

    fn chart_title(first: &StationSeries, second: &StationSeries) -> String {
        match (first.year(), second.year()) {
            (Some(y1), Some(y2)) => format!(
                "Daily Highs and Lows: {}, {} and {}, {}",
                first.station, y1, second.station, y2
            ),
            _ => "Daily Highs and Lows".to_string(),
        }
    }

    /// Export the comparison chart as a PNG and open it with the system
    /// default viewer.
    fn handle_export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name("weather_comparison.png")
            .save_file()
        else {
            return; // User cancelled
        };

        match StaticChartRenderer::render_png(&self.first, &self.second, &path, 1400, 900) {
            Ok(()) => {
                self.panel
                    .set_status(&format!("Exported {}", path.display()));
                if let Err(e) = open::that(&path) {
                    self.panel
                        .set_status(&format!("Exported, but could not open viewer: {e}"));
                }
            }
            Err(e) => self.panel.set_status(&format!("Export error: {e}")),
        }
    }
}

impl eframe::App for WeatherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - station summaries
        SidePanel::left("summary_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.panel.show(ui, &self.summaries);
                    if action == SummaryAction::ExportPng {
                        self.handle_export();
                    }
                });
            });

        // Central panel - comparison chart
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&self.title).size(16.0).strong());
            });
            ui.add_space(4.0);
            ChartPlotter::draw_comparison(ui, &self.first, &self.second);
        });
    }
}
