pub mod classify;
pub mod groups;
pub mod summarize;

use std::{fs, path::Path};

use anyhow::{Context, Result, bail, ensure};
use tracing::info;
use viability::{
    RawResult,
    io::{ColumnMapping, DataFrame, ResultsCsvOptions, read_results_csv, write_csv, write_csv_string, write_json, write_json_string},
};

use crate::cli::{InputArgs, OutputArgs, TableFormat};

/// Read the raw result rows named by the input arguments.
pub(crate) fn load_results(input: &InputArgs) -> Result<Vec<RawResult>> {
    ensure!(input.separator.is_ascii(), "separator must be a single ASCII character, got {:?}", input.separator);
    let options = ResultsCsvOptions {
        separator: input.separator as u8,
        columns: ColumnMapping::parse_all(input.renames.iter().map(String::as_str))?,
    };

    let results = read_results_csv(&input.results, &options)?;
    info!(rows = results.len(), path = %input.results.display(), "loaded result rows");
    Ok(results)
}

/// Refuse to clobber an existing file unless forced.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.is_dir() { bail!("Output path is a directory: {}", path.display()); }
    if path.exists() && !force {
        bail!("Output file already exists: {} (use --force to overwrite)", path.display());
    }
    Ok(())
}

/// Write a table to the output file, or to stdout when none is given.
pub(crate) fn emit_table(df: &mut DataFrame, format: TableFormat, output: &OutputArgs) -> Result<()> {
    match &output.output {
        Some(path) => {
            ensure_writable(path, output.force)?;
            match format {
                TableFormat::Csv => write_csv(df, path)?,
                TableFormat::Json => write_json(df, path)?,
            }
            info!(rows = df.height(), path = %path.display(), "wrote table");
        }
        None => {
            let text = match format {
                TableFormat::Csv => write_csv_string(df)?,
                TableFormat::Json => write_json_string(df)?,
            };
            print!("{text}");
        }
    }
    Ok(())
}

/// Write plain text to the output file, or to stdout when none is given.
pub(crate) fn emit_text(text: &str, output: &OutputArgs) -> Result<()> {
    match &output.output {
        Some(path) => {
            ensure_writable(path, output.force)?;
            fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => print!("{text}"),
    }
    Ok(())
}
