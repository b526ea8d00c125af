use anyhow::Result;
use viability::io::classified_to_dataframe;

use crate::cli::{ClassifyArgs, Cli};
use super::{emit_table, load_results};

pub fn run(_cli: &Cli, args: &ClassifyArgs) -> Result<()> {
    let results = load_results(&args.input)?;
    let classification = viability::classify(&results)?;

    let mut df = classified_to_dataframe(&classification.rows)?;
    emit_table(&mut df, args.format, &args.output)
}
