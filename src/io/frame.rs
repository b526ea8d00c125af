//! Conversions between Polars DataFrames and the row types.

use anyhow::{Context, Result, anyhow, ensure};
use polars::{frame::DataFrame, prelude::{Column, DataType}};

use crate::{
    ClassifiedCandidate, RawResult,
    aggregate::{PartyStats, ZoneStats},
    classify::{Partition, SUMMARY_METRICS, Summary},
};

/// Columns a results DataFrame must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["zone", "candidate_id", "party_accronym", "votes", "situation_code"];

/// Extract raw result rows from a DataFrame with canonical column names.
///
/// Display columns may be absent (they default to empty strings); the
/// columns in [`REQUIRED_COLUMNS`] must be present and non-null.
pub fn results_from_dataframe(df: &DataFrame) -> Result<Vec<RawResult>> {
    for name in REQUIRED_COLUMNS {
        ensure!(df.column(name).is_ok(), "[io::frame] missing required column {name:?}");
    }

    let zones = integer_column(df, "zone")?;
    let candidate_ids = string_column(df, "candidate_id")?;
    let party_accronyms = string_column(df, "party_accronym")?;
    let votes = integer_column(df, "votes")?;
    let situation_codes = integer_column(df, "situation_code")?;

    let candidate_numbers = optional_string_column(df, "candidate_number")?;
    let candidate_names = optional_string_column(df, "candidate_name")?;
    let ballot_names = optional_string_column(df, "ballot_name")?;
    let party_numbers = optional_string_column(df, "party_number")?;
    let party_names = optional_string_column(df, "party_name")?;
    let situation_descriptions = optional_string_column(df, "situation_description")?;

    (0..df.height())
        .map(|i| {
            let required = |values: &[Option<i64>], name: &str| values[i]
                .ok_or_else(|| anyhow!("[io::frame] row {i}: {name} is missing or not an integer"));

            let zone = required(&zones[..], "zone")?;
            let zone = u32::try_from(zone)
                .with_context(|| format!("[io::frame] row {i}: zone {zone} is out of range"))?;
            let count = required(&votes[..], "votes")?;
            let count = u64::try_from(count)
                .with_context(|| format!("[io::frame] row {i}: votes {count} is negative"))?;

            let candidate_id = candidate_ids[i].clone()
                .filter(|id| !id.is_empty())
                .ok_or_else(|| anyhow!("[io::frame] row {i}: candidate_id is missing"))?;
            let party_accronym = party_accronyms[i].clone()
                .ok_or_else(|| anyhow!("[io::frame] row {i}: party_accronym is missing"))?;

            Ok(RawResult {
                zone,
                candidate_id,
                candidate_number: candidate_numbers[i].clone(),
                candidate_name: candidate_names[i].clone(),
                ballot_name: ballot_names[i].clone(),
                party_number: party_numbers[i].clone(),
                party_accronym,
                party_name: party_names[i].clone(),
                votes: count,
                situation_code: required(&situation_codes[..], "situation_code")?,
                situation_description: situation_descriptions[i].clone(),
            })
        })
        .collect()
}

/// Classified rows as a DataFrame, one row per `(zone, candidate)`.
pub fn classified_to_dataframe(rows: &[ClassifiedCandidate]) -> Result<DataFrame> {
    Ok(DataFrame::new(vec![
        Column::new("zone".into(), rows.iter().map(|r| r.zone).collect::<Vec<_>>()),
        Column::new("candidate_id".into(), rows.iter().map(|r| r.candidate_id.as_str()).collect::<Vec<_>>()),
        Column::new("candidate_name".into(), rows.iter().map(|r| r.candidate_name.as_str()).collect::<Vec<_>>()),
        Column::new("party_accronym".into(), rows.iter().map(|r| r.party_accronym.as_str()).collect::<Vec<_>>()),
        Column::new("situation_code".into(), rows.iter().map(|r| r.situation_code).collect::<Vec<_>>()),
        Column::new("votes".into(), rows.iter().map(|r| r.votes).collect::<Vec<_>>()),
        Column::new("zone_vote".into(), rows.iter().map(|r| r.zone_vote).collect::<Vec<_>>()),
        Column::new("share".into(), rows.iter().map(|r| r.share).collect::<Vec<_>>()),
        Column::new("eff_in_zone".into(), rows.iter().map(|r| r.eff_in_zone).collect::<Vec<_>>()),
        Column::new("rank_in_zone".into(), rows.iter().map(|r| r.rank_in_zone).collect::<Vec<_>>()),
        Column::new("associate".into(), rows.iter().map(|r| r.associate).collect::<Vec<_>>()),
        Column::new("eff_in_party".into(), rows.iter().map(|r| r.eff_in_party).collect::<Vec<_>>()),
        Column::new("rank_in_party".into(), rows.iter().map(|r| r.rank_in_party).collect::<Vec<_>>()),
        Column::new("viable".into(), rows.iter().map(|r| r.viable).collect::<Vec<_>>()),
        Column::new("intermediate".into(), rows.iter().map(|r| r.intermediate).collect::<Vec<_>>()),
    ])?)
}

/// Party statistics as a DataFrame, one row per party.
pub fn party_stats_to_dataframe(parties: &[PartyStats]) -> Result<DataFrame> {
    Ok(DataFrame::new(vec![
        Column::new("party_accronym".into(), parties.iter().map(|p| p.party_accronym.as_str()).collect::<Vec<_>>()),
        Column::new("party_vote".into(), parties.iter().map(|p| p.party_vote).collect::<Vec<_>>()),
        Column::new("num_candidates".into(), parties.iter().map(|p| p.num_candidates as u32).collect::<Vec<_>>()),
        Column::new("eff_in_party".into(), parties.iter().map(|p| p.eff_in_party).collect::<Vec<_>>()),
        Column::new("threshold".into(), parties.iter().map(|p| p.threshold).collect::<Vec<_>>()),
        Column::new("num_viable".into(), parties.iter().map(|p| p.num_viable as u32).collect::<Vec<_>>()),
    ])?)
}

/// Zone statistics as a DataFrame, one row per zone.
pub fn zone_stats_to_dataframe(zones: &[ZoneStats]) -> Result<DataFrame> {
    Ok(DataFrame::new(vec![
        Column::new("zone".into(), zones.iter().map(|z| z.zone).collect::<Vec<_>>()),
        Column::new("zone_vote".into(), zones.iter().map(|z| z.zone_vote).collect::<Vec<_>>()),
        Column::new("num_candidates".into(), zones.iter().map(|z| z.num_candidates as u32).collect::<Vec<_>>()),
        Column::new("eff_in_zone".into(), zones.iter().map(|z| z.eff_in_zone).collect::<Vec<_>>()),
        Column::new("threshold".into(), zones.iter().map(|z| z.threshold).collect::<Vec<_>>()),
        Column::new("num_associates".into(), zones.iter().map(|z| z.num_associates as u32).collect::<Vec<_>>()),
    ])?)
}

impl Summary {
    /// The summary as a metric-by-partition table: a `metric` column followed
    /// by one Float64 column per partition.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns = vec![Column::new("metric".into(), SUMMARY_METRICS.to_vec())];
        columns.extend(Partition::ALL.iter()
            .map(|&partition| Column::new(partition.name().into(), self.get(partition).values().to_vec())));
        Ok(DataFrame::new(columns)?)
    }
}

/// Read a column as nullable integers; unparseable values become nulls.
fn integer_column(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let column = df.column(name)?
        .cast(&DataType::Int64)
        .with_context(|| format!("[io::frame] column {name:?} is not numeric"))?;
    Ok(column.i64()?.into_iter().collect())
}

/// Read a column as nullable strings.
fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?
        .cast(&DataType::String)
        .with_context(|| format!("[io::frame] column {name:?} cannot be read as text"))?;
    Ok(column.str()?.into_iter().map(|value| value.map(str::to_string)).collect())
}

/// Read a display column, defaulting absent columns and nulls to empty strings.
fn optional_string_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    if df.column(name).is_err() { return Ok(vec![String::new(); df.height()]) }
    Ok(string_column(df, name)?.into_iter().map(Option::unwrap_or_default).collect())
}
