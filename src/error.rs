use thiserror::Error;

/// Violations of the one-candidate-one-record contract between the result
/// rows, the zone aggregation and the party aggregation.
///
/// These abort a run; arithmetic on empty groups does not (it yields NaN).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("candidate {candidate_id:?} appears more than once in zone {zone}")]
    DuplicateZoneRow { zone: u32, candidate_id: String },

    #[error("candidate {candidate_id:?} in zone data has no party-level record")]
    MissingPartyRecord { candidate_id: String },

    #[error("candidate {candidate_id:?} matches {} party-level records (parties: {})", .parties.len(), .parties.join(", "))]
    DuplicatePartyRecord { candidate_id: String, parties: Vec<String> },
}

impl IntegrityError {
    /// Identifier of the offending candidate.
    pub fn candidate_id(&self) -> &str {
        match self {
            IntegrityError::DuplicateZoneRow { candidate_id, .. }
            | IntegrityError::MissingPartyRecord { candidate_id }
            | IntegrityError::DuplicatePartyRecord { candidate_id, .. } => candidate_id,
        }
    }
}
