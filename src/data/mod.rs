//! Data module - CSV loading and series extraction

mod loader;
mod series;

pub use loader::{LoaderError, WeatherFile, REQUIRED_COLUMNS};
pub use series::StationSeries;
