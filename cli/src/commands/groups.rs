use anyhow::Result;
use viability::io::{party_stats_to_dataframe, zone_stats_to_dataframe};

use crate::cli::{Cli, GroupBy, GroupsArgs};
use super::{emit_table, load_results};

pub fn run(_cli: &Cli, args: &GroupsArgs) -> Result<()> {
    let results = load_results(&args.input)?;
    let classification = viability::classify(&results)?;

    let mut df = match args.by {
        GroupBy::Party => party_stats_to_dataframe(&classification.parties.parties)?,
        GroupBy::Zone => zone_stats_to_dataframe(&classification.zones.zones)?,
    };
    emit_table(&mut df, args.format, &args.output)
}
