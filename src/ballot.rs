use crate::consts::MIN_GROUPS;
use crate::error::{VbResult, VoteBarError};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    Jury,
    Audience,
}

/// One group's ballots. `None` means no vote has been entered yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BallotEntry {
    pub jury_votes: Option<u32>,
    pub audience_votes: Option<u32>,
}

impl BallotEntry {
    pub fn new(jury_votes: Option<u32>, audience_votes: Option<u32>) -> Self {
        Self {
            jury_votes,
            audience_votes,
        }
    }

    pub fn votes(&self, channel: Channel) -> Option<u32> {
        match channel {
            Channel::Jury => self.jury_votes,
            Channel::Audience => self.audience_votes,
        }
    }

    pub fn set_votes(&mut self, channel: Channel, votes: Option<u32>) {
        match channel {
            Channel::Jury => self.jury_votes = votes,
            Channel::Audience => self.audience_votes = votes,
        }
    }
}

/// Ordered ballots of every group in a round. Always holds at least two groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BallotEntry>", into = "Vec<BallotEntry>")]
pub struct GroupSet {
    groups: Vec<BallotEntry>,
}

impl GroupSet {
    pub fn new(groups: Vec<BallotEntry>) -> VbResult<Self> {
        if groups.len() < MIN_GROUPS {
            return Err(VoteBarError::Validation(format!(
                "a round needs at least {} groups, got {}",
                MIN_GROUPS,
                groups.len()
            )));
        }
        Ok(Self { groups })
    }

    /// `count` groups with nothing entered yet.
    pub fn unset(count: usize) -> VbResult<Self> {
        Self::new(vec![BallotEntry::default(); count])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BallotEntry> {
        self.groups.get(index)
    }

    pub fn entries(&self) -> &[BallotEntry] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BallotEntry> {
        self.groups.iter()
    }

    pub fn entry_mut(&mut self, index: usize) -> VbResult<&mut BallotEntry> {
        let len = self.groups.len();
        self.groups.get_mut(index).ok_or_else(|| {
            VoteBarError::Validation(format!(
                "group index {} out of range (round has {} groups)",
                index, len
            ))
        })
    }
}

impl TryFrom<Vec<BallotEntry>> for GroupSet {
    type Error = VoteBarError;

    fn try_from(groups: Vec<BallotEntry>) -> VbResult<Self> {
        Self::new(groups)
    }
}

impl From<GroupSet> for Vec<BallotEntry> {
    fn from(set: GroupSet) -> Self {
        set.groups
    }
}

impl<'a> IntoIterator for &'a GroupSet {
    type Item = &'a BallotEntry;
    type IntoIter = std::slice::Iter<'a, BallotEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn single_group_round_is_rejected() {
        let err = GroupSet::new(vec![BallotEntry::default()]).unwrap_err();
        assert!(matches!(err, VoteBarError::Validation(_)));
    }

    #[test]
    fn entries_route_by_channel() {
        let mut entry = BallotEntry::default();
        entry.set_votes(Channel::Audience, Some(42));
        assert_eq!(entry.votes(Channel::Audience), Some(42));
        assert_eq!(entry.votes(Channel::Jury), None);
    }

    #[test]
    fn channel_names_parse_case_insensitively() {
        assert_eq!(Channel::from_str("jury").unwrap(), Channel::Jury);
        assert_eq!(Channel::from_str("AUDIENCE").unwrap(), Channel::Audience);
        assert_eq!(Channel::iter().count(), 2);
    }

    #[test]
    fn json_round_needs_two_groups() {
        let ok: GroupSet =
            serde_json::from_str(r#"[{"juryVotes": 3}, {"audienceVotes": null}]"#).unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok.get(0).unwrap().jury_votes, Some(3));

        let short: Result<GroupSet, _> = serde_json::from_str(r#"[{"juryVotes": 3}]"#);
        assert!(short.is_err());
    }
}
