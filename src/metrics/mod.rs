//! Vote-concentration statistics shared by the party and zone aggregations.

mod concentration;
mod rank;

pub use concentration::{Concentration, effective_number, rank_threshold, vote_share, within_threshold};
pub use rank::min_rank;
