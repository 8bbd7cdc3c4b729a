#![allow(dead_code)]

use votebar::ballot::{BallotEntry, GroupSet};

pub const EPS: f64 = 1e-9;

/// Builds a round from (jury, audience) pairs.
pub fn round(pairs: &[(Option<u32>, Option<u32>)]) -> GroupSet {
    GroupSet::new(
        pairs
            .iter()
            .map(|&(jury, audience)| BallotEntry::new(jury, audience))
            .collect(),
    )
    .expect("test rounds have at least two groups")
}

/// Reference jury formula, written the long way round.
pub fn expected_jury(votes: u32, max_votes: u32) -> f64 {
    14.0 + 56.0 * (votes as f64 / 70.0) * ((1.0 + votes as f64).ln() / (1.0 + max_votes as f64).ln())
}

pub fn expected_audience(votes: u32, max_votes: u32) -> f64 {
    6.0 + 24.0 * (votes as f64 / 120.0)
        * ((1.0 + votes as f64).ln() / (1.0 + max_votes as f64).ln())
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}
