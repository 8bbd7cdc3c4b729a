pub mod channel;
pub mod engine;
pub mod height;
pub mod types;

pub use self::channel::channel_score;
pub use self::height::height_percent;
pub use self::types::{Maxima, ScoreResult};
use crate::ballot::{Channel, GroupSet};
use crate::config::ScoringRules;
use crate::error::VbResult;
use tracing::debug;

/// Stateless scoring engine. Holds only the (validated) rule constants;
/// every call recomputes from the snapshot it is given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scorer {
    pub rules: ScoringRules,
}

impl Scorer {
    pub fn new(rules: ScoringRules) -> VbResult<Self> {
        rules.validate()?;
        debug!("Scorer rules: {:?}", rules);
        Ok(Self { rules })
    }

    pub fn jury_score(&self, votes: Option<u32>, max_votes: u32) -> f64 {
        channel_score(votes, max_votes, &self.rules.channel(Channel::Jury))
    }

    pub fn audience_score(&self, votes: Option<u32>, max_votes: u32) -> f64 {
        channel_score(votes, max_votes, &self.rules.channel(Channel::Audience))
    }

    pub fn maxima(&self, set: &GroupSet) -> Maxima {
        engine::maxima(self, set)
    }

    pub fn score_round(&self, set: &GroupSet) -> Vec<ScoreResult> {
        engine::score_round(self, set)
    }
}

// Entry points with the standard ballot rules (jury 70/14/56, audience 120/6/24).

pub fn jury_score(votes: Option<u32>, max_votes: u32) -> f64 {
    Scorer::default().jury_score(votes, max_votes)
}

pub fn audience_score(votes: Option<u32>, max_votes: u32) -> f64 {
    Scorer::default().audience_score(votes, max_votes)
}

pub fn compute_maxima(set: &GroupSet) -> Maxima {
    Scorer::default().maxima(set)
}

pub fn compute_all(set: &GroupSet) -> Vec<ScoreResult> {
    Scorer::default().score_round(set)
}
