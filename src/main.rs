//! Tempview - Weather CSV Comparison & Interactive Chart Viewer
//!
//! Reads two weather-station CSV files, checks them against each other and
//! shows their daily highs and lows in one interactive chart.

mod charts;
mod data;
mod gui;
mod stats;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use eframe::egui;

use data::{StationSeries, WeatherFile, REQUIRED_COLUMNS};
use gui::WeatherApp;

fn main() -> eframe::Result<()> {
    let (first_path, second_path) = match read_paths() {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            process::exit(1);
        }
    };

    // Validate both paths up front, before touching any file contents.
    if !first_path.exists() || !second_path.exists() {
        println!("File(s) not found. Please confirm the path name(s) are correct.");
        process::exit(1);
    }

    let (first, second) = match load_series(&first_path, &second_path) {
        Ok(series) => series,
        Err(e) => {
            println!("Incorrect data provided in file(s).");
            println!("Please double check the data is valid in both files.");
            println!("({e})");
            process::exit(1);
        }
    };

    if first.is_duplicate_of(&second) {
        println!("Duplicate data found.");
        println!("Please ensure that each provided file has different data.");
        process::exit(1);
    }

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 700.0])
            .with_min_inner_size([900.0, 550.0])
            .with_title("Tempview"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Tempview",
        options,
        Box::new(move |cc| Ok(Box::new(WeatherApp::new(cc, first, second)))),
    )
}

/// Prompt for the two CSV paths on standard input.
fn read_paths() -> io::Result<(PathBuf, PathBuf)> {
    let first = prompt("Provide the path name of the first CSV file: ")?;
    let second = prompt("Provide the path name of the second CSV file: ")?;
    Ok((PathBuf::from(first), PathBuf::from(second)))
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Load both files and extract their series, requiring every header label.
fn load_series(
    first_path: &Path,
    second_path: &Path,
) -> Result<(StationSeries, StationSeries)> {
    let first_file = WeatherFile::load(first_path)?;
    first_file.require_columns(&REQUIRED_COLUMNS)?;
    let first = StationSeries::extract(first_file.dataframe())?;

    let second_file = WeatherFile::load(second_path)?;
    second_file.require_columns(&REQUIRED_COLUMNS)?;
    let second = StationSeries::extract(second_file.dataframe())?;

    Ok((first, second))
}
