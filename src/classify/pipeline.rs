use anyhow::{Context, Result};
use tracing::info;

use crate::{
    ClassifiedCandidate, ElectionConfig, RawResult,
    aggregate::{PartyAggregate, ZoneAggregate, aggregate_by_party, aggregate_by_zone, check_unique_rows},
};
use super::{Summary, join, summarize};

/// Everything derived from one pass over an election's result rows.
#[derive(Debug, Clone)]
pub struct Classification {
    pub parties: PartyAggregate,
    pub zones: ZoneAggregate,
    pub rows: Vec<ClassifiedCandidate>, // one per result row, ordered by zone then rank
}

impl Classification {
    /// Summary statistics of the classified rows.
    pub fn summarize(&self, config: &ElectionConfig) -> Summary { summarize(&self.rows, config) }

    /// Number of distinct candidates.
    #[inline] pub fn num_candidates(&self) -> usize { self.parties.candidates.len() }

    /// Number of (zone, candidate) rows flagged intermediate.
    pub fn num_intermediate_rows(&self) -> usize { self.rows.iter().filter(|r| r.intermediate).count() }
}

/// Run the party and zone aggregations over `results` and join them.
///
/// Fails on a repeated `(zone, candidate_id)` row or on a candidate whose
/// zone rows do not match exactly one party-level record. Zero-vote groups
/// do not fail; their shares and effective counts are NaN.
pub fn classify(results: &[RawResult]) -> Result<Classification> {
    check_unique_rows(results).context("[classify] invalid result rows")?;

    let parties = aggregate_by_party(results);
    let zones = aggregate_by_zone(results);
    let rows = join(&zones.candidates, &parties.candidates)
        .context("[classify] failed to join zone rows with party records")?;

    let classification = Classification { parties, zones, rows };
    info!(
        rows = classification.rows.len(),
        candidates = classification.num_candidates(),
        parties = classification.parties.parties.len(),
        zones = classification.zones.zones.len(),
        intermediate_rows = classification.num_intermediate_rows(),
        "[classify] classified election"
    );
    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::classify;
    use crate::{IntegrityError, RawResult, fixtures::two_zone_election};

    #[test]
    fn keeps_everything_derived() {
        let classification = classify(&two_zone_election()).unwrap();
        assert_eq!(classification.rows.len(), 5);
        assert_eq!(classification.num_candidates(), 4);
        assert_eq!(classification.parties.parties.len(), 2);
        assert_eq!(classification.zones.zones.len(), 2);
        assert_eq!(classification.num_intermediate_rows(), 0);
    }

    #[test]
    fn integrity_errors_can_be_downcast() {
        let mut results = two_zone_election();
        results.push(RawResult::new(3, "B", "X", 1));

        let err = classify(&results).unwrap_err();
        let integrity = err.downcast_ref::<IntegrityError>().unwrap();
        assert_eq!(integrity.candidate_id(), "B");
        assert!(format!("{err:#}").contains("[classify]"));
    }

    #[test]
    fn repeated_row_is_rejected_before_aggregation() {
        let mut results = two_zone_election();
        results.push(RawResult::new(1, "A", "X", 1));

        let err = classify(&results).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IntegrityError>(),
            Some(IntegrityError::DuplicateZoneRow { zone: 1, .. }),
        ));
    }
}
