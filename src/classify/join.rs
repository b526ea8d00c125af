use std::collections::HashMap;

use crate::{CandidateByParty, CandidateByZone, ClassifiedCandidate, IntegrityError};

/// Attach party-level viability to every zone row, matched on `candidate_id`.
///
/// Each zone row must match exactly one party record. The output has the
/// same length and order as `zones`.
pub fn join(zones: &[CandidateByZone], parties: &[CandidateByParty]) -> Result<Vec<ClassifiedCandidate>, IntegrityError> {
    let mut index: HashMap<&str, Vec<&CandidateByParty>> = HashMap::with_capacity(parties.len());
    for party in parties {
        index.entry(party.candidate_id.as_str()).or_default().push(party);
    }

    zones.iter()
        .map(|zone| match index.get(zone.candidate_id.as_str()).map(Vec::as_slice) {
            Some([party]) => Ok(ClassifiedCandidate::from_parts(zone, party)),
            Some(matches) if !matches.is_empty() => Err(IntegrityError::DuplicatePartyRecord {
                candidate_id: zone.candidate_id.clone(),
                parties: matches.iter().map(|p| p.party_accronym.clone()).collect(),
            }),
            _ => Err(IntegrityError::MissingPartyRecord { candidate_id: zone.candidate_id.clone() }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::join;
    use crate::{
        IntegrityError, RawResult,
        aggregate::{aggregate_by_party, aggregate_by_zone},
        fixtures::{three_zone_election, two_zone_election},
    };

    #[test]
    fn preserves_zone_row_count_and_order() {
        let results = three_zone_election();
        let zones = aggregate_by_zone(&results).candidates;
        let parties = aggregate_by_party(&results).candidates;

        let rows = join(&zones, &parties).unwrap();
        assert_eq!(rows.len(), zones.len());
        for (row, zone) in rows.iter().zip(&zones) {
            assert_eq!((row.zone, &row.candidate_id), (zone.zone, &zone.candidate_id));
        }
    }

    #[test]
    fn intermediate_is_associate_but_not_viable() {
        let results = three_zone_election();
        let rows = join(&aggregate_by_zone(&results).candidates, &aggregate_by_party(&results).candidates).unwrap();

        let intermediates = rows.iter().filter(|r| r.intermediate).map(|r| r.candidate_id.as_str()).collect::<Vec<_>>();
        assert_eq!(intermediates, ["E"]);
        for row in &rows {
            assert_eq!(row.intermediate, row.associate && !row.viable);
            assert!(!(row.intermediate && row.viable));
        }
    }

    #[test]
    fn candidate_in_two_parties_is_an_integrity_error() {
        let mut results = two_zone_election();
        results.push(RawResult::new(3, "A", "Y", 10));

        let zones = aggregate_by_zone(&results).candidates;
        let parties = aggregate_by_party(&results).candidates;
        let err = join(&zones, &parties).unwrap_err();
        assert_eq!(err, IntegrityError::DuplicatePartyRecord {
            candidate_id: "A".into(),
            parties: vec!["X".into(), "Y".into()],
        });
        assert_eq!(err.candidate_id(), "A");
    }

    #[test]
    fn missing_party_record_is_an_integrity_error() {
        let results = two_zone_election();
        let zones = aggregate_by_zone(&results).candidates;
        let parties = aggregate_by_party(&results).candidates.into_iter()
            .filter(|p| p.candidate_id != "C")
            .collect::<Vec<_>>();

        let err = join(&zones, &parties).unwrap_err();
        assert_eq!(err, IntegrityError::MissingPartyRecord { candidate_id: "C".into() });
    }
}
