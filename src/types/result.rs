use serde::{Deserialize, Serialize};

/// One row of raw election output: the valid nominal votes a candidate
/// received in a single zone.
///
/// Only `zone`, `candidate_id`, `party_accronym`, `votes` and
/// `situation_code` take part in the computation; the remaining fields are
/// carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResult {
    pub zone: u32,
    pub candidate_id: String, // unique within the election
    pub candidate_number: String,
    pub candidate_name: String,
    pub ballot_name: String,
    pub party_number: String,
    pub party_accronym: String, // grouping key for party aggregation
    pub party_name: String,
    pub votes: u64,
    pub situation_code: i64,
    pub situation_description: String,
}

impl RawResult {
    /// Create a result row with the computational fields set and empty display fields.
    pub fn new(zone: u32, candidate_id: impl Into<String>, party_accronym: impl Into<String>, votes: u64) -> Self {
        Self {
            zone,
            candidate_id: candidate_id.into(),
            candidate_number: String::new(),
            candidate_name: String::new(),
            ballot_name: String::new(),
            party_number: String::new(),
            party_accronym: party_accronym.into(),
            party_name: String::new(),
            votes,
            situation_code: 0,
            situation_description: String::new(),
        }
    }

    /// Set the election-outcome status of this row.
    pub fn with_situation(mut self, code: i64, description: impl Into<String>) -> Self {
        self.situation_code = code;
        self.situation_description = description.into();
        self
    }

    /// Set the display name of the candidate.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.candidate_name = name.into();
        self
    }
}
