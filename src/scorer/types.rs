use serde::{Deserialize, Serialize};

/// Highest ballot count per channel across the whole round (unset counts as 0).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maxima {
    pub jury: u32,
    pub audience: u32,
}

/// Full-precision result for one group. Rounding happens in the report layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    // Position in the round, 0-based
    pub position: usize,

    pub jury_score: f64,
    pub audience_score: f64,
    pub total_score: f64,

    // Bar top, in percent of the full bar
    pub height_percent: f64,
}
