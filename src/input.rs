use crate::ballot::{BallotEntry, Channel};
use crate::config::ScoringRules;
use crate::error::{VbResult, VoteBarError};

/// Parses one form field.
///
/// Blank text clears the ballot (`Ok(None)`). Anything that is not a whole
/// number in `[0, ceiling]` is rejected, and the caller keeps the previous value.
pub fn parse_vote_input(raw: &str, channel: Channel, ceiling: u32) -> VbResult<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: i64 = trimmed.parse().map_err(|_| {
        VoteBarError::Validation(format!(
            "{} votes must be a whole number, got '{}'",
            channel, trimmed
        ))
    })?;

    check_range(value, channel, ceiling).map(Some)
}

/// Range-checks a count against the channel ceiling.
pub fn check_range(value: i64, channel: Channel, ceiling: u32) -> VbResult<u32> {
    if value < 0 || value > ceiling as i64 {
        return Err(VoteBarError::Validation(format!(
            "{} votes must be between 0 and {}, got {}",
            channel, ceiling, value
        )));
    }
    Ok(value as u32)
}

/// Lenient alternative to [`check_range`]: pulls any count to the nearest bound.
pub fn clamp_votes(value: i64, ceiling: u32) -> u32 {
    value.clamp(0, ceiling as i64) as u32
}

/// Parses a `jury,audience` pair such as `"70,120"`, `",15"` or `"3,"`.
/// Either side may be blank to leave that channel unset.
pub fn parse_ballot_pair(spec: &str, rules: &ScoringRules) -> VbResult<BallotEntry> {
    let (jury, audience) = spec.split_once(',').ok_or_else(|| {
        VoteBarError::Validation(format!(
            "expected 'jury,audience' (either side may be blank), got '{}'",
            spec
        ))
    })?;

    Ok(BallotEntry::new(
        parse_vote_input(jury, Channel::Jury, rules.jury_ceiling)?,
        parse_vote_input(audience, Channel::Audience, rules.audience_ceiling)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_clears() {
        assert_eq!(parse_vote_input("", Channel::Jury, 70).unwrap(), None);
        assert_eq!(parse_vote_input("   ", Channel::Jury, 70).unwrap(), None);
    }

    #[test]
    fn whole_numbers_in_range_pass() {
        assert_eq!(parse_vote_input("0", Channel::Jury, 70).unwrap(), Some(0));
        assert_eq!(parse_vote_input(" 70 ", Channel::Jury, 70).unwrap(), Some(70));
        assert_eq!(
            parse_vote_input("120", Channel::Audience, 120).unwrap(),
            Some(120)
        );
    }

    #[test]
    fn bad_text_is_rejected() {
        for raw in ["71", "-1", "12.5", "abc", "7e1"] {
            assert!(
                parse_vote_input(raw, Channel::Jury, 70).is_err(),
                "'{}' should be rejected",
                raw
            );
        }
    }

    #[test]
    fn pairs_allow_blank_sides() {
        let rules = ScoringRules::default();
        assert_eq!(
            parse_ballot_pair("70,120", &rules).unwrap(),
            BallotEntry::new(Some(70), Some(120))
        );
        assert_eq!(
            parse_ballot_pair(" , 8", &rules).unwrap(),
            BallotEntry::new(None, Some(8))
        );
        assert_eq!(parse_ballot_pair(",", &rules).unwrap(), BallotEntry::default());
        assert!(parse_ballot_pair("70", &rules).is_err());
        assert!(parse_ballot_pair("80,1", &rules).is_err());
    }

    #[test]
    fn clamp_pulls_to_bounds() {
        assert_eq!(clamp_votes(-3, 70), 0);
        assert_eq!(clamp_votes(35, 70), 35);
        assert_eq!(clamp_votes(999, 120), 120);
    }
}
