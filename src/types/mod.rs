mod candidate;
mod result;

pub use candidate::{CandidateByParty, CandidateByZone, ClassifiedCandidate};
pub use result::RawResult;
