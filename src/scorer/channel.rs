use crate::config::ChannelRules;

/// Logarithmic sub-score of one channel.
///
/// `floor + spread * (votes / ceiling) * (ln(1 + votes) / ln(1 + max_votes))`
///
/// An unset ballot, or a round where nobody has votes yet, gets exactly the
/// floor. Counts above the ceiling are clamped, and `max_votes` is lifted to
/// at least `votes`, so the result always stays in `[floor, floor + spread]`.
pub fn channel_score(votes: Option<u32>, max_votes: u32, rules: &ChannelRules) -> f64 {
    let Some(votes) = votes else {
        return rules.floor;
    };
    if max_votes == 0 || rules.ceiling == 0 {
        return rules.floor;
    }

    let votes = votes.min(rules.ceiling);
    let max_votes = max_votes.min(rules.ceiling).max(votes);

    let share = votes as f64 / rules.ceiling as f64;
    let relative = (votes as f64).ln_1p() / (max_votes as f64).ln_1p();

    rules.floor + rules.spread * share * relative
}

#[cfg(test)]
mod tests {
    use super::*;

    const JURY: ChannelRules = ChannelRules {
        ceiling: 70,
        floor: 14.0,
        spread: 56.0,
    };

    #[test]
    fn unset_is_floor() {
        assert_eq!(channel_score(None, 50, &JURY), 14.0);
    }

    #[test]
    fn empty_round_is_floor() {
        assert_eq!(channel_score(Some(0), 0, &JURY), 14.0);
    }

    #[test]
    fn zero_votes_against_a_leader_is_floor() {
        assert_eq!(channel_score(Some(0), 35, &JURY), 14.0);
    }

    #[test]
    fn leader_gets_full_log_ratio() {
        assert_eq!(channel_score(Some(35), 35, &JURY), 14.0 + 56.0 * (35.0 / 70.0));
    }

    #[test]
    fn overflow_is_clamped_to_ceiling() {
        assert_eq!(channel_score(Some(500), 500, &JURY), 70.0);
        // stale maximum below the group's own count
        assert_eq!(channel_score(Some(70), 10, &JURY), 70.0);
    }
}
