//! Group-by → aggregate passes over raw result rows.
//!
//! Both passes read the same rows independently: [`aggregate_by_party`]
//! collapses zones into per-candidate totals before grouping by party, while
//! [`aggregate_by_zone`] works on the zone rows directly.

mod party;
mod zone;

use std::collections::HashSet;

pub use party::{PartyAggregate, PartyStats, aggregate_by_party};
pub use zone::{ZoneAggregate, ZoneStats, aggregate_by_zone};

use crate::{IntegrityError, RawResult};

/// Check that no `(zone, candidate_id)` pair occurs twice.
pub fn check_unique_rows(results: &[RawResult]) -> Result<(), IntegrityError> {
    let mut seen = HashSet::with_capacity(results.len());
    for result in results {
        if !seen.insert((result.zone, result.candidate_id.as_str())) {
            return Err(IntegrityError::DuplicateZoneRow {
                zone: result.zone,
                candidate_id: result.candidate_id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_unique_rows;
    use crate::{IntegrityError, RawResult, fixtures::two_zone_election};

    #[test]
    fn unique_rows_pass() {
        assert!(check_unique_rows(&two_zone_election()).is_ok());
    }

    #[test]
    fn repeated_zone_row_is_reported() {
        let mut results = two_zone_election();
        results.push(RawResult::new(2, "C", "X", 5));
        assert_eq!(
            check_unique_rows(&results),
            Err(IntegrityError::DuplicateZoneRow { zone: 2, candidate_id: "C".into() }),
        );
    }
}
