pub mod explain;
pub mod score;

use clap::Args;
use votebar::ballot::GroupSet;
use votebar::config::ScoringRules;
use votebar::error::VbResult;
use votebar::input::parse_ballot_pair;
use votebar::loader::load_ballots_from_file;

/// Where the round's ballots come from. `--ballots` wins over `--group`;
/// with neither, `--groups` empty groups are scored.
#[derive(Args, Debug, Clone)]
pub struct BallotSource {
    /// Ballot sheet (.csv with jury/audience columns, or .json)
    #[arg(short, long)]
    pub ballots: Option<String>,

    /// Inline ballots as JURY,AUDIENCE; repeat once per group
    #[arg(short, long, allow_hyphen_values = true)]
    pub group: Vec<String>,

    #[arg(long, default_value_t = 3)]
    pub groups: usize,
}

impl BallotSource {
    pub fn resolve(&self, rules: &ScoringRules) -> VbResult<GroupSet> {
        if let Some(path) = &self.ballots {
            return load_ballots_from_file(path, rules);
        }
        if !self.group.is_empty() {
            let entries = self
                .group
                .iter()
                .map(|spec| parse_ballot_pair(spec, rules))
                .collect::<VbResult<Vec<_>>>()?;
            return GroupSet::new(entries);
        }
        GroupSet::unset(self.groups)
    }
}
