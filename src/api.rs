use crate::ballot::{Channel, GroupSet};
use crate::config::DisplayParams;
use crate::consts::MAX_PRECISION;
use crate::error::VbResult;
use crate::input::{check_range, parse_vote_input};
use crate::scorer::{Maxima, ScoreResult, Scorer};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Rounds for presentation only. The engine never rounds.
/// Precision is capped at [`MAX_PRECISION`] digits.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let digits = i32::try_from(precision.min(MAX_PRECISION)).unwrap_or(0);
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupReport {
    pub label: String,
    pub jury_votes: Option<u32>,
    pub audience_votes: Option<u32>,
    pub jury_score: f64,
    pub audience_score: f64,
    pub total_score: f64,
    pub height_percent: f64,

    // Sub-score above the floor; absent while the channel is unset
    pub jury_bonus: Option<f64>,
    pub audience_bonus: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundReport {
    pub max_jury: u32,
    pub max_audience: u32,
    pub groups: Vec<GroupReport>,
}

/// Scores a round and dresses the results for display: positional labels and
/// values rounded to `display.precision` decimals.
pub fn build_report(scorer: &Scorer, set: &GroupSet, display: &DisplayParams) -> RoundReport {
    let Maxima { jury, audience } = scorer.maxima(set);
    let results = scorer.score_round(set);
    let jury_floor = scorer.rules.jury_floor;
    let audience_floor = scorer.rules.audience_floor;
    let round = |v: f64| round_to(v, display.precision);

    let groups = set
        .iter()
        .zip(results.iter())
        .map(|(entry, r)| GroupReport {
            label: display.label_for(r.position),
            jury_votes: entry.jury_votes,
            audience_votes: entry.audience_votes,
            jury_score: round(r.jury_score),
            audience_score: round(r.audience_score),
            total_score: round(r.total_score),
            height_percent: round(r.height_percent),
            jury_bonus: entry.jury_votes.map(|_| round(r.jury_score - jury_floor)),
            audience_bonus: entry
                .audience_votes
                .map(|_| round(r.audience_score - audience_floor)),
        })
        .collect();

    RoundReport {
        max_jury: jury,
        max_audience: audience,
        groups,
    }
}

/// The collaborator's side of the engine: owns the current ballots, accepts
/// edits, and rescoring from scratch on every read.
#[derive(Debug, Clone)]
pub struct PreviewSession {
    scorer: Scorer,
    ballots: GroupSet,
}

impl PreviewSession {
    /// A round of `groups` groups with no ballots entered.
    pub fn new(groups: usize, scorer: Scorer) -> VbResult<Self> {
        Ok(Self {
            scorer,
            ballots: GroupSet::unset(groups)?,
        })
    }

    pub fn from_ballots(ballots: GroupSet, scorer: Scorer) -> VbResult<Self> {
        crate::loader::check_ballots(&ballots, &scorer.rules)?;
        Ok(Self { scorer, ballots })
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn ballots(&self) -> &GroupSet {
        &self.ballots
    }

    /// Applies raw form text. A rejected edit leaves the stored ballot untouched.
    pub fn set_vote(&mut self, group: usize, channel: Channel, raw: &str) -> VbResult<()> {
        let ceiling = self.scorer.rules.channel(channel).ceiling;
        let votes = parse_vote_input(raw, channel, ceiling).inspect_err(|e| {
            warn!("Rejected {} input '{}' for group {}: {}", channel, raw, group + 1, e);
        })?;
        self.set_count(group, channel, votes)
    }

    pub fn set_count(&mut self, group: usize, channel: Channel, votes: Option<u32>) -> VbResult<()> {
        if let Some(v) = votes {
            check_range(v as i64, channel, self.scorer.rules.channel(channel).ceiling)?;
        }
        self.ballots.entry_mut(group)?.set_votes(channel, votes);
        debug!("Group {} {} = {:?}", group + 1, channel, votes);
        Ok(())
    }

    pub fn results(&self) -> Vec<ScoreResult> {
        self.scorer.score_round(&self.ballots)
    }

    pub fn report(&self, display: &DisplayParams) -> RoundReport {
        build_report(&self.scorer, &self.ballots, display)
    }
}
