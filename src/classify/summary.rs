use std::{collections::HashSet, fmt};

use serde::Serialize;

use crate::{ClassifiedCandidate, ElectionConfig};

/// Row labels of the summary table, in the order of [`PartitionStats::values`].
pub const SUMMARY_METRICS: [&str; 5] = [
    "Number",
    "Mean Rank in party",
    "Min Rank in party",
    "Max Rank in party",
    "Max share in zone",
];

/// Candidate groups reported in the summary.
///
/// Membership is decided by independent filters, so a candidate may belong
/// to more than one group (an elected candidate can also be intermediate in
/// some zone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Partition {
    Elected,
    UnelectedViable,
    Intermediate,
}

impl Partition {
    pub const ALL: [Partition; 3] = [Partition::Elected, Partition::UnelectedViable, Partition::Intermediate];

    /// Column label in the summary table.
    pub fn name(self) -> &'static str {
        match self {
            Partition::Elected => "Elected",
            Partition::UnelectedViable => "Unelected Viable",
            Partition::Intermediate => "Intermediate",
        }
    }

    /// Whether a classified row falls into this group.
    pub fn contains(self, row: &ClassifiedCandidate, config: &ElectionConfig) -> bool {
        match self {
            Partition::Elected => config.is_elected(row.situation_code),
            Partition::UnelectedViable => row.viable && !config.is_elected(row.situation_code),
            Partition::Intermediate => row.intermediate,
        }
    }
}

/// Statistics over the rows of one partition.
///
/// Counts and ranks are taken per distinct candidate (a candidate's
/// `rank_in_party` is the same in every zone); the share maximum is taken
/// over the matching zone rows. Every value except `count` is NaN for an
/// empty partition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartitionStats {
    pub count: usize,
    pub mean_rank: f64,
    pub min_rank: f64,
    pub max_rank: f64,
    pub max_share_pct: f64,
}

impl PartitionStats {
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a ClassifiedCandidate>) -> Self {
        let mut seen = HashSet::new();
        let mut ranks = Vec::new();
        let mut max_share = f64::NAN;
        for row in rows {
            if seen.insert(row.candidate_id.as_str()) {
                ranks.push(row.rank_in_party as f64);
            }
            max_share = max_share.max(row.share); // NaN shares are skipped
        }

        let (mean_rank, min_rank, max_rank) = match ranks.len() {
            0 => (f64::NAN, f64::NAN, f64::NAN),
            n => (
                ranks.iter().sum::<f64>() / n as f64,
                ranks.iter().copied().fold(f64::INFINITY, f64::min),
                ranks.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            ),
        };

        Self { count: ranks.len(), mean_rank, min_rank, max_rank, max_share_pct: 100.0 * max_share }
    }

    #[inline] pub fn is_empty(&self) -> bool { self.count == 0 }

    /// Values aligned with [`SUMMARY_METRICS`].
    pub fn values(&self) -> [f64; 5] {
        [self.count as f64, self.mean_rank, self.min_rank, self.max_rank, self.max_share_pct]
    }
}

/// Per-partition statistics for one election.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub elected: PartitionStats,
    pub unelected_viable: PartitionStats,
    pub intermediate: PartitionStats,
}

impl Summary {
    pub fn get(&self, partition: Partition) -> &PartitionStats {
        match partition {
            Partition::Elected => &self.elected,
            Partition::UnelectedViable => &self.unelected_viable,
            Partition::Intermediate => &self.intermediate,
        }
    }
}

/// Compute the summary statistics of every partition over classified rows.
pub fn summarize(rows: &[ClassifiedCandidate], config: &ElectionConfig) -> Summary {
    let stats = |partition: Partition| {
        PartitionStats::from_rows(rows.iter().filter(|row| partition.contains(row, config)))
    };
    Summary {
        elected: stats(Partition::Elected),
        unelected_viable: stats(Partition::UnelectedViable),
        intermediate: stats(Partition::Intermediate),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<20}", "")?;
        for partition in Partition::ALL {
            write!(f, "{:>18}", partition.name())?;
        }
        writeln!(f)?;

        for (m, metric) in SUMMARY_METRICS.iter().enumerate() {
            write!(f, "{:<20}", metric)?;
            for partition in Partition::ALL {
                let value = self.get(partition).values()[m];
                if value.is_nan() {
                    write!(f, "{:>18}", "-")?;
                } else if m == 0 {
                    write!(f, "{:>18}", value as usize)?;
                } else {
                    write!(f, "{:>18.2}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
