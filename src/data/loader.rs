//! CSV Data Loader Module
//! Handles CSV file loading and header validation using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Header labels every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["DATE", "TMAX", "TMIN", "NAME"];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("{path}: required column \"{column}\" not found")]
    MissingColumn { path: PathBuf, column: String },
    #[error("{path}: file contains no data rows")]
    Empty { path: PathBuf },
}

/// A weather CSV loaded into memory, tied to its originating path.
pub struct WeatherFile {
    df: DataFrame,
    path: PathBuf,
}

impl WeatherFile {
    /// Load a CSV file using Polars.
    ///
    /// Schema inference covers the whole station export; unparsable cells
    /// become nulls so row-level handling can skip them later.
    pub fn load(path: &Path) -> Result<Self, LoaderError> {
        let df = LazyCsvReader::new(path.to_path_buf())
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        if df.height() == 0 {
            return Err(LoaderError::Empty {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            df,
            path: path.to_path_buf(),
        })
    }

    /// Check that every required header label is present in this file.
    pub fn require_columns(&self, columns: &[&str]) -> Result<(), LoaderError> {
        for &column in columns {
            if self.df.column(column).is_err() {
                return Err(LoaderError::MissingColumn {
                    path: self.path.clone(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Get list of column names from the loaded DataFrame.
    pub fn columns(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    /// Get a reference to the loaded DataFrame.
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Get the originating file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_station_export() {
        let file = WeatherFile::load(Path::new("tests/data/station_a.csv")).unwrap();
        assert_eq!(file.row_count(), 5);
        assert!(file.columns().contains(&"TMAX".to_string()));
        assert!(file.require_columns(&REQUIRED_COLUMNS).is_ok());
    }

    #[test]
    fn missing_header_is_reported_by_name() {
        let file = WeatherFile::load(Path::new("tests/data/no_date_column.csv")).unwrap();
        let err = file.require_columns(&REQUIRED_COLUMNS).unwrap_err();
        match err {
            LoaderError::MissingColumn { column, .. } => assert_eq!(column, "DATE"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nonexistent_path_fails_to_load() {
        assert!(WeatherFile::load(Path::new("tests/data/does_not_exist.csv")).is_err());
    }
}
