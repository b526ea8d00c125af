use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow, ensure};
use polars::frame::DataFrame;

/// Renames from source column headers to the canonical result column names
/// (`zone`, `candidate_id`, `party_accronym`, `votes`, ...).
///
/// Columns without an entry are expected to already carry their canonical name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    renames: BTreeMap<String, String>, // source -> canonical
}

impl ColumnMapping {
    /// Add a rename from `source` to `canonical`.
    pub fn rename(mut self, source: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.renames.insert(source.into(), canonical.into());
        self
    }

    /// Parse a single `source=canonical` rename.
    pub fn parse_rename(rename: &str) -> Result<(String, String)> {
        let (source, canonical) = rename.split_once('=')
            .ok_or_else(|| anyhow!("[io::columns] rename {rename:?} must look like source=canonical"))?;
        let (source, canonical) = (source.trim(), canonical.trim());
        ensure!(!source.is_empty() && !canonical.is_empty(), "[io::columns] rename {rename:?} has an empty side");
        Ok((source.to_string(), canonical.to_string()))
    }

    /// Build a mapping from `source=canonical` renames.
    pub fn parse_all<'a>(renames: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        renames.into_iter().try_fold(Self::default(), |mapping, rename| {
            let (source, canonical) = Self::parse_rename(rename)?;
            ensure!(
                !mapping.renames.values().any(|c| *c == canonical),
                "[io::columns] more than one source column renamed to {canonical:?}",
            );
            Ok(mapping.rename(source, canonical))
        })
    }

    #[inline] pub fn is_empty(&self) -> bool { self.renames.is_empty() }

    /// Rename the columns of `df` in place of their source headers.
    pub fn apply(&self, mut df: DataFrame) -> Result<DataFrame> {
        for (source, canonical) in &self.renames {
            df.rename(source, canonical.as_str().into())
                .with_context(|| format!("[io::columns] Failed to rename column {source:?} to {canonical:?}"))?;
        }
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::ColumnMapping;

    #[test]
    fn parses_renames() {
        let mapping = ColumnMapping::parse_all(["QT_VOTOS=votes", " NR_ZONA = zone "]).unwrap();
        assert_eq!(mapping, ColumnMapping::default().rename("QT_VOTOS", "votes").rename("NR_ZONA", "zone"));
    }

    #[test]
    fn rejects_malformed_renames() {
        assert!(ColumnMapping::parse_rename("votes").is_err());
        assert!(ColumnMapping::parse_rename("=votes").is_err());
        assert!(ColumnMapping::parse_all(["A=votes", "B=votes"]).is_err());
    }
}
