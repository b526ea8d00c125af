#![doc = "Candidate viability, association and intermediate classification from zone-level vote tallies"]
pub mod aggregate;
pub mod classify;
mod config;
mod error;
pub mod io;
pub mod metrics;
mod types;

#[cfg(test)]
mod fixtures;

#[doc(inline)]
pub use types::{CandidateByParty, CandidateByZone, ClassifiedCandidate, RawResult};

#[doc(inline)]
pub use classify::{Classification, Partition, PartitionStats, Summary, classify, summarize};

#[doc(inline)]
pub use config::ElectionConfig;

#[doc(inline)]
pub use error::IntegrityError;
