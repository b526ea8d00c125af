use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// Per-election settings that the classification cannot derive from the data.
///
/// ```json
/// { "elected_codes": [2, 3] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElectionConfig {
    /// `situation_code` values that mark a candidate as elected.
    pub elected_codes: BTreeSet<i64>,
}

impl ElectionConfig {
    pub fn new(elected_codes: impl IntoIterator<Item = i64>) -> Self {
        Self { elected_codes: elected_codes.into_iter().collect() }
    }

    /// Reads and validates a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[config] Failed to open config file: {}", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[config] Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .context("[config] Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configs that could never mark anyone elected.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.elected_codes.is_empty(), "[config] at least one elected situation code is required");
        Ok(())
    }

    #[inline] pub fn is_elected(&self, situation_code: i64) -> bool { self.elected_codes.contains(&situation_code) }
}
