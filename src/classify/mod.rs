//! Reconciles the party and zone passes into classified rows and partition statistics.

mod join;
mod pipeline;
mod summary;

pub use join::join;
pub use pipeline::{Classification, classify};
pub use summary::{Partition, PartitionStats, SUMMARY_METRICS, Summary, summarize};
