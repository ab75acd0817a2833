//! GUI module - User interface components

mod app;
mod summary_panel;

pub use app::WeatherApp;
pub use summary_panel::{SummaryAction, SummaryPanel};
