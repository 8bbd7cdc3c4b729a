use super::channel::channel_score;
use super::height::height_percent;
use super::{Maxima, ScoreResult, Scorer};
use crate::ballot::{BallotEntry, Channel, GroupSet};

/// Maximum clamped count per channel over the whole round.
pub fn maxima(scorer: &Scorer, set: &GroupSet) -> Maxima {
    let channel_max = |channel: Channel| {
        let ceiling = scorer.rules.channel(channel).ceiling;
        set.iter()
            .map(|entry| entry.votes(channel).unwrap_or(0).min(ceiling))
            .max()
            .unwrap_or(0)
    };

    Maxima {
        jury: channel_max(Channel::Jury),
        audience: channel_max(Channel::Audience),
    }
}

/// Scores one group against maxima taken from its round.
pub fn score_entry(
    scorer: &Scorer,
    position: usize,
    entry: &BallotEntry,
    maxima: &Maxima,
) -> ScoreResult {
    let jury_score = channel_score(
        entry.jury_votes,
        maxima.jury,
        &scorer.rules.channel(Channel::Jury),
    );
    let audience_score = channel_score(
        entry.audience_votes,
        maxima.audience,
        &scorer.rules.channel(Channel::Audience),
    );
    let total_score = jury_score + audience_score;

    ScoreResult {
        position,
        jury_score,
        audience_score,
        total_score,
        height_percent: height_percent(total_score),
    }
}

/// Scores every group of the round, preserving input order.
pub fn score_round(scorer: &Scorer, set: &GroupSet) -> Vec<ScoreResult> {
    // Every group is measured against the round-wide maxima, so these
    // must be known before the first group is scored.
    let maxima = maxima(scorer, set);

    set.iter()
        .enumerate()
        .map(|(position, entry)| score_entry(scorer, position, entry, &maxima))
        .collect()
}
