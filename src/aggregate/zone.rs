use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{CandidateByZone, RawResult, metrics::Concentration};

/// Zone-wide summary of vote concentration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneStats {
    pub zone: u32,
    pub zone_vote: u64,
    pub num_candidates: usize,
    pub eff_in_zone: f64,
    pub threshold: Option<u32>, // ceil(eff_in_zone), None when undefined
    pub num_associates: usize,
}

/// Output of the zone pass: one row per result row, one summary per zone.
#[derive(Debug, Clone, Default)]
pub struct ZoneAggregate {
    pub candidates: Vec<CandidateByZone>,
    pub zones: Vec<ZoneStats>,
}

/// Rank candidates within each zone on their zone votes.
///
/// Rows are never collapsed: every input row yields exactly one output row.
/// Output is ordered by zone, then rank, then candidate id.
pub fn aggregate_by_zone(results: &[RawResult]) -> ZoneAggregate {
    let mut by_zone: BTreeMap<u32, Vec<&RawResult>> = BTreeMap::new();
    for result in results {
        by_zone.entry(result.zone).or_default().push(result);
    }

    let mut aggregate = ZoneAggregate::default();
    for (zone, mut members) in by_zone {
        members.sort_by(|a, b| a.candidate_id.cmp(&b.candidate_id));
        let votes = members.iter().map(|r| r.votes).collect::<Vec<_>>();
        let concentration = Concentration::from_votes(&votes);
        if concentration.is_degenerate() {
            warn!(zone, candidates = members.len(), "zone has no votes; share and eff_in_zone are undefined");
        }

        let mut rows = members.iter().enumerate()
            .map(|(i, result)| CandidateByZone {
                zone,
                candidate_id: result.candidate_id.clone(),
                candidate_name: result.candidate_name.clone(),
                party_accronym: result.party_accronym.clone(),
                situation_code: result.situation_code,
                votes: result.votes,
                zone_vote: concentration.total,
                share: concentration.shares[i],
                eff_in_zone: concentration.effective,
                rank_in_zone: concentration.ranks[i],
                associate: concentration.is_competitive(i),
            })
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| a.rank_in_zone.cmp(&b.rank_in_zone).then_with(|| a.candidate_id.cmp(&b.candidate_id)));

        aggregate.zones.push(ZoneStats {
            zone,
            zone_vote: concentration.total,
            num_candidates: concentration.len(),
            eff_in_zone: concentration.effective,
            threshold: concentration.threshold(),
            num_associates: concentration.num_competitive(),
        });
        aggregate.candidates.extend(rows);
    }

    debug!(
        rows = results.len(),
        zones = aggregate.zones.len(),
        "[aggregate::zone] aggregated"
    );
    aggregate
}

#[cfg(test)]
mod tests {
    use super::aggregate_by_zone;
    use crate::{RawResult, fixtures::{three_zone_election, two_zone_election}};

    const EPS: f64 = 1e-9;

    #[test]
    fn keeps_one_row_per_result() {
        let results = two_zone_election();
        let aggregate = aggregate_by_zone(&results);
        assert_eq!(aggregate.candidates.len(), results.len());
        assert_eq!(aggregate.zones.len(), 2);
        assert_eq!(aggregate.candidates.iter().filter(|c| c.candidate_id == "A").count(), 2);
    }

    #[test]
    fn two_zone_scenario() {
        let aggregate = aggregate_by_zone(&two_zone_election());

        let zone1 = &aggregate.zones[0];
        assert_eq!(zone1.zone_vote, 100);
        assert!((zone1.eff_in_zone - 1.0 / 0.52).abs() < EPS);
        assert_eq!(zone1.threshold, Some(2));

        // Zone 2: D 40 first, A and C tied second
        let zone2 = aggregate.candidates.iter().filter(|c| c.zone == 2).collect::<Vec<_>>();
        let ranks = zone2.iter().map(|c| (c.candidate_id.as_str(), c.rank_in_zone)).collect::<Vec<_>>();
        assert_eq!(ranks, [("D", 1), ("A", 2), ("C", 2)]);
        assert!((zone2[0].eff_in_zone - 1.0 / 0.34).abs() < EPS);
        assert!(zone2.iter().all(|c| c.associate));
    }

    #[test]
    fn shares_sum_to_one_per_zone() {
        let aggregate = aggregate_by_zone(&three_zone_election());
        for zone in &aggregate.zones {
            let total_share = aggregate.candidates.iter()
                .filter(|c| c.zone == zone.zone)
                .map(|c| c.share)
                .sum::<f64>();
            assert!((total_share - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn low_ranked_candidate_is_not_associate() {
        let results = vec![
            RawResult::new(1, "A", "X", 90),
            RawResult::new(1, "B", "Y", 5),
            RawResult::new(1, "C", "Z", 5),
        ];
        let aggregate = aggregate_by_zone(&results);

        // eff ≈ 1.23 → cutoff 2; B and C tie at rank 2 and both pass
        assert_eq!(aggregate.zones[0].threshold, Some(2));
        assert_eq!(aggregate.zones[0].num_associates, 3);

        let results = vec![
            RawResult::new(1, "A", "X", 90),
            RawResult::new(1, "B", "Y", 6),
            RawResult::new(1, "C", "Z", 4),
        ];
        let aggregate = aggregate_by_zone(&results);
        let c = aggregate.candidates.iter().find(|c| c.candidate_id == "C").unwrap();
        assert_eq!(c.rank_in_zone, 3);
        assert!(!c.associate);
    }

    #[test]
    fn zero_vote_zone_propagates_nan() {
        let mut results = two_zone_election();
        results.push(RawResult::new(9, "A", "X", 0));
        results.push(RawResult::new(9, "B", "Y", 0));

        let aggregate = aggregate_by_zone(&results);
        let empty = aggregate.candidates.iter().filter(|c| c.zone == 9).collect::<Vec<_>>();
        assert_eq!(empty.len(), 2);
        assert!(empty.iter().all(|c| c.share.is_nan() && c.eff_in_zone.is_nan() && !c.associate));

        // Other zones are unaffected
        assert!(aggregate.candidates.iter().filter(|c| c.zone != 9).all(|c| c.share.is_finite()));
    }
}
