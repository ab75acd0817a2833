//! Summary Panel Widget
//! Left side panel with per-station summaries and the export control.

use egui::{Color32, RichText};

use crate::stats::StationSummary;

/// Action requested by the panel this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryAction {
    None,
    ExportPng,
}

/// Left side panel showing station summaries.
pub struct SummaryPanel {
    pub status: String,
}

impl Default for SummaryPanel {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
        }
    }
}

impl SummaryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the panel.
    pub fn show(&mut self, ui: &mut egui::Ui, summaries: &[StationSummary]) -> SummaryAction {
        let mut action = SummaryAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🌡 Tempview")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Weather CSV Comparison")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        for summary in summaries {
            Self::draw_summary(ui, summary);
            ui.add_space(8.0);
        }

        ui.separator();
        ui.add_space(5.0);

        if ui.button(RichText::new("🖼 Export PNG…").size(13.0)).clicked() {
            action = SummaryAction::ExportPng;
        }

        ui.add_space(5.0);
        ui.label(RichText::new(&self.status).size(11.0).color(Color32::GRAY));

        action
    }

    fn draw_summary(ui: &mut egui::Ui, summary: &StationSummary) {
        ui.label(RichText::new(&summary.station).size(14.0).strong());
        ui.add_space(3.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(format!("summary_{}", summary.station)))
                    .striped(true)
                    .min_col_width(90.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Observations").size(11.0));
                        ui.label(RichText::new(summary.count.to_string()).size(11.0));
                        ui.end_row();

                        ui.label(RichText::new("Span").size(11.0));
                        ui.label(
                            RichText::new(format!(
                                "{} to {}",
                                summary.first_date, summary.last_date
                            ))
                            .size(11.0),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Mean high").size(11.0));
                        ui.label(RichText::new(format!("{:.1} F", summary.mean_high)).size(11.0));
                        ui.end_row();

                        ui.label(RichText::new("Mean low").size(11.0));
                        ui.label(RichText::new(format!("{:.1} F", summary.mean_low)).size(11.0));
                        ui.end_row();

                        ui.label(RichText::new("Record high").size(11.0));
                        ui.label(
                            RichText::new(format!(
                                "{:.1} F on {}",
                                summary.record_high, summary.record_high_date
                            ))
                            .size(11.0),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Record low").size(11.0));
                        ui.label(
                            RichText::new(format!(
                                "{:.1} F on {}",
                                summary.record_low, summary.record_low_date
                            ))
                            .size(11.0),
                        );
                        ui.end_row();
                    });
            });
    }
}
