use super::min_rank;

/// Slack subtracted before rounding an effective count up, so float noise
/// such as `3.0000000000000004` still yields a cutoff of 3.
const CEIL_TOLERANCE: f64 = 1e-9;

/// Fraction of a group's `total` won by `votes`.
/// Returns NaN for a group with no votes.
pub fn vote_share(votes: u64, total: u64) -> f64 {
    if total == 0 { return f64::NAN }
    votes as f64 / total as f64
}

/// Effective number of candidates (Laakso–Taagepera): 1 / Σ(share²).
///
/// Equals N for N equal shares and approaches 1 as one candidate dominates.
/// Returns NaN for a group with no votes.
pub fn effective_number(votes: &[u64]) -> f64 {
    let total = votes.iter().sum::<u64>();
    if total == 0 { return f64::NAN }

    let herfindahl = votes.iter()
        .map(|&v| vote_share(v, total).powi(2))
        .sum::<f64>();
    1.0 / herfindahl
}

/// Highest rank that still counts as competitive: ceil(effective count).
/// `None` when the effective count is undefined.
pub fn rank_threshold(effective: f64) -> Option<u32> {
    if !effective.is_finite() { return None }
    Some((effective - CEIL_TOLERANCE).ceil().max(0.0) as u32)
}

/// Whether `rank` falls within the competitive cutoff of `effective`.
/// Always false for an undefined effective count.
pub fn within_threshold(rank: u32, effective: f64) -> bool {
    rank_threshold(effective).is_some_and(|threshold| rank <= threshold)
}

/// Concentration statistics for one group of vote counts (a party or a zone).
/// Per-member vectors are aligned with the input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Concentration {
    pub total: u64,
    pub shares: Vec<f64>,
    pub effective: f64,
    pub ranks: Vec<u32>,
}

impl Concentration {
    pub fn from_votes(votes: &[u64]) -> Self {
        let total = votes.iter().sum::<u64>();
        Self {
            total,
            shares: votes.iter().map(|&v| vote_share(v, total)).collect(),
            effective: effective_number(votes),
            ranks: min_rank(votes),
        }
    }

    /// Number of members in the group.
    #[inline] pub fn len(&self) -> usize { self.ranks.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.ranks.is_empty() }

    /// True when the group has no votes and its shares are undefined.
    #[inline] pub fn is_degenerate(&self) -> bool { self.total == 0 }

    #[inline] pub fn threshold(&self) -> Option<u32> { rank_threshold(self.effective) }

    /// Whether member `i` ranks within the competitive cutoff.
    #[inline] pub fn is_competitive(&self, i: usize) -> bool { within_threshold(self.ranks[i], self.effective) }

    /// Count of members within the competitive cutoff.
    pub fn num_competitive(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_competitive(i)).count()
    }
}
