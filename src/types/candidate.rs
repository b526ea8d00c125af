use serde::Serialize;

/// Party-level view of a candidate, with votes collapsed across all zones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateByParty {
    pub candidate_id: String,
    pub party_accronym: String,
    pub total_votes: u64, // sum over zones
    pub party_vote: u64,  // sum of total_votes over the party
    pub share: f64,
    pub eff_in_party: f64,
    pub rank_in_party: u32,
    pub viable: bool,
}

/// Zone-level view of a candidate, one per `(zone, candidate_id)` result row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateByZone {
    pub zone: u32,
    pub candidate_id: String,
    pub candidate_name: String,
    pub party_accronym: String,
    pub situation_code: i64,
    pub votes: u64,
    pub zone_vote: u64,
    pub share: f64,
    pub eff_in_zone: f64,
    pub rank_in_zone: u32,
    pub associate: bool,
}

/// A zone-level row joined with the party-level classification of its candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedCandidate {
    pub zone: u32,
    pub candidate_id: String,
    pub candidate_name: String,
    pub party_accronym: String,
    pub situation_code: i64,
    pub votes: u64,
    pub zone_vote: u64,
    pub share: f64, // zone share
    pub eff_in_zone: f64,
    pub rank_in_zone: u32,
    pub associate: bool,
    pub eff_in_party: f64,
    pub rank_in_party: u32,
    pub viable: bool,
    pub intermediate: bool, // associate && !viable
}

impl ClassifiedCandidate {
    /// Combine a zone row with its party-level record.
    pub(crate) fn from_parts(zone: &CandidateByZone, party: &CandidateByParty) -> Self {
        Self {
            zone: zone.zone,
            candidate_id: zone.candidate_id.clone(),
            candidate_name: zone.candidate_name.clone(),
            party_accronym: zone.party_accronym.clone(),
            situation_code: zone.situation_code,
            votes: zone.votes,
            zone_vote: zone.zone_vote,
            share: zone.share,
            eff_in_zone: zone.eff_in_zone,
            rank_in_zone: zone.rank_in_zone,
            associate: zone.associate,
            eff_in_party: party.eff_in_party,
            rank_in_party: party.rank_in_party,
            viable: party.viable,
            intermediate: zone.associate && !party.viable,
        }
    }
}
