use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{CandidateByParty, RawResult, metrics::Concentration};

/// Party-wide summary of vote concentration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyStats {
    pub party_accronym: String,
    pub party_vote: u64,
    pub num_candidates: usize,
    pub eff_in_party: f64,
    pub threshold: Option<u32>, // ceil(eff_in_party), None when undefined
    pub num_viable: usize,
}

/// Output of the party pass: one row per candidate, one summary per party.
#[derive(Debug, Clone, Default)]
pub struct PartyAggregate {
    pub candidates: Vec<CandidateByParty>,
    pub parties: Vec<PartyStats>,
}

/// Collapse zone rows into candidate totals, then rank candidates within their party.
///
/// Candidates are keyed by `(party_accronym, candidate_id)`, so a candidate id
/// filed under two parties yields two records; the join rejects that later.
/// Output is ordered by party, then rank, then candidate id.
pub fn aggregate_by_party(results: &[RawResult]) -> PartyAggregate {
    // 1) Sum votes across zones per candidate
    let mut totals: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    for result in results {
        *totals.entry((result.party_accronym.as_str(), result.candidate_id.as_str())).or_default() += result.votes;
    }

    // 2) Group candidate totals by party
    let mut by_party: BTreeMap<&str, Vec<(&str, u64)>> = BTreeMap::new();
    for (&(party, candidate_id), &total_votes) in &totals {
        by_party.entry(party).or_default().push((candidate_id, total_votes));
    }

    // 3) Shares, effective count, ranks and viability per party
    let mut aggregate = PartyAggregate::default();
    for (party, members) in by_party {
        let votes = members.iter().map(|&(_, v)| v).collect::<Vec<_>>();
        let concentration = Concentration::from_votes(&votes);
        if concentration.is_degenerate() {
            warn!(party, candidates = members.len(), "party has no votes; share and eff_in_party are undefined");
        }

        let mut rows = members.iter().enumerate()
            .map(|(i, &(candidate_id, total_votes))| CandidateByParty {
                candidate_id: candidate_id.to_string(),
                party_accronym: party.to_string(),
                total_votes,
                party_vote: concentration.total,
                share: concentration.shares[i],
                eff_in_party: concentration.effective,
                rank_in_party: concentration.ranks[i],
                viable: concentration.is_competitive(i),
            })
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| a.rank_in_party.cmp(&b.rank_in_party).then_with(|| a.candidate_id.cmp(&b.candidate_id)));

        aggregate.parties.push(PartyStats {
            party_accronym: party.to_string(),
            party_vote: concentration.total,
            num_candidates: concentration.len(),
            eff_in_party: concentration.effective,
            threshold: concentration.threshold(),
            num_viable: concentration.num_competitive(),
        });
        aggregate.candidates.extend(rows);
    }

    debug!(
        rows = results.len(),
        candidates = aggregate.candidates.len(),
        parties = aggregate.parties.len(),
        "[aggregate::party] aggregated"
    );
    aggregate
}
