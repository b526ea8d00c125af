use anyhow::{Context, Result};
use tracing::warn;
use viability::{ElectionConfig, Partition};

use crate::cli::{Cli, SummarizeArgs, SummaryFormat, TableFormat};
use super::{emit_table, emit_text, load_results};

pub fn run(_cli: &Cli, args: &SummarizeArgs) -> Result<()> {
    let config = election_config(args)?;
    let results = load_results(&args.input)?;
    let summary = viability::classify(&results)?.summarize(&config);

    for partition in Partition::ALL {
        if summary.get(partition).is_empty() {
            warn!(partition = partition.name(), "partition is empty; its rank and share statistics are undefined");
        }
    }

    match args.format {
        SummaryFormat::Text => emit_text(&summary.to_string(), &args.output),
        SummaryFormat::Csv => emit_table(&mut summary.to_dataframe()?, TableFormat::Csv, &args.output),
        SummaryFormat::Json => emit_table(&mut summary.to_dataframe()?, TableFormat::Json, &args.output),
    }
}

/// Elected codes from `--config`, or else from `--elected-code`.
fn election_config(args: &SummarizeArgs) -> Result<ElectionConfig> {
    match &args.config {
        Some(path) => ElectionConfig::from_json_file(path),
        None => {
            let config = ElectionConfig::new(args.elected_codes.iter().copied());
            config.validate().context("pass --config or at least one --elected-code")?;
            Ok(config)
        }
    }
}
