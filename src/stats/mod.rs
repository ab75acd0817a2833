//! Stats module - per-station descriptive summaries

mod calculator;

pub use calculator::{StationSummary, SummaryCalculator};
