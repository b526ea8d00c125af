//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader}};

use crate::{RawResult, io::{ColumnMapping, results_from_dataframe}};

/// How a results CSV is laid out.
#[derive(Debug, Clone)]
pub struct ResultsCsvOptions {
    /// Field separator, `b','` by default.
    pub separator: u8,
    /// Renames from source headers to canonical result columns.
    pub columns: ColumnMapping,
}

impl Default for ResultsCsvOptions {
    fn default() -> Self {
        Self { separator: b',', columns: ColumnMapping::default() }
    }
}

/// Reads a results CSV file from `path` into a Polars DataFrame with canonical column names.
///
/// Every column is read as a string so identifiers keep their leading zeros;
/// numeric columns are cast when rows are extracted.
pub fn read_csv(path: &Path, options: &ResultsCsvOptions) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    let df = CsvReader::new(file)
        .with_options(read_options(options))
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))?;
    options.columns.apply(df)
}

/// Reads a results CSV from a string.
pub fn read_csv_string(csv: &str, options: &ResultsCsvOptions) -> Result<DataFrame> {
    let df = CsvReader::new(Cursor::new(csv.as_bytes()))
        .with_options(read_options(options))
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")?;
    options.columns.apply(df)
}

/// Reads raw result rows from a CSV file.
pub fn read_results_csv(path: &Path, options: &ResultsCsvOptions) -> Result<Vec<RawResult>> {
    results_from_dataframe(&read_csv(path, options)?)
        .with_context(|| format!("[io::csv::read] Invalid result rows in {}", path.display()))
}

/// Reads raw result rows from a CSV string.
pub fn read_results_csv_string(csv: &str, options: &ResultsCsvOptions) -> Result<Vec<RawResult>> {
    results_from_dataframe(&read_csv_string(csv, options)?)
}

fn read_options(options: &ResultsCsvOptions) -> CsvReadOptions {
    let separator = options.separator;
    CsvReadOptions::default()
        .with_has_header(true)
        .map_parse_options(|po| po.with_separator(separator))
        .with_infer_schema_length(Some(0))
}
