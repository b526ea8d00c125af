//! Small hand-checked elections shared by unit tests.

use crate::RawResult;

/// Two zones, two parties, four candidates.
///
/// Zone 1: A(X) 60, B(Y) 40. Zone 2: A(X) 30, C(X) 30, D(Y) 40.
pub(crate) fn two_zone_election() -> Vec<RawResult> {
    vec![
        RawResult::new(1, "A", "X", 60),
        RawResult::new(1, "B", "Y", 40),
        RawResult::new(2, "A", "X", 30),
        RawResult::new(2, "C", "X", 30),
        RawResult::new(2, "D", "Y", 40),
    ]
}

/// Three zones, two parties, six candidates; E is locally strong in zone 3
/// but third in party X, so it is the only intermediate. A and D are elected.
pub(crate) fn three_zone_election() -> Vec<RawResult> {
    vec![
        RawResult::new(1, "A", "X", 1000).with_situation(2, "ELECTED BY QP"),
        RawResult::new(1, "B", "Y", 300).with_situation(5, "SUBSTITUTE"),
        RawResult::new(2, "C", "X", 500).with_situation(5, "SUBSTITUTE"),
        RawResult::new(2, "D", "Y", 300).with_situation(3, "ELECTED BY AVERAGE"),
        RawResult::new(3, "E", "X", 10).with_situation(4, "NOT ELECTED"),
        RawResult::new(3, "F", "Y", 5).with_situation(4, "NOT ELECTED"),
    ]
}
