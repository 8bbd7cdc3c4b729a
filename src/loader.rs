use crate::ballot::{BallotEntry, Channel, GroupSet};
use crate::config::ScoringRules;
use crate::error::{VbResult, VoteBarError};
use crate::input::{check_range, parse_vote_input};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info};

fn in_context(context: String, err: VoteBarError) -> VoteBarError {
    match err {
        VoteBarError::Validation(msg) => VoteBarError::Validation(format!("{}: {}", context, msg)),
        other => other,
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> VbResult<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| VoteBarError::Validation(format!("ballot sheet has no '{}' column", name)))
}

/// Reads a ballot sheet with a header row. `jury` and `audience` columns are
/// required, any others (a `group` name, notes) are ignored. Blank cells are
/// unset ballots.
pub fn load_ballots_csv<R: Read>(reader: R, rules: &ScoringRules) -> VbResult<GroupSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let jury_col = column_index(&headers, "jury")?;
    let audience_col = column_index(&headers, "audience")?;

    let mut groups = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        // header is row 1
        let row = idx + 2;
        let rec = result?;

        let mut entry = BallotEntry::default();
        for (channel, col) in [(Channel::Jury, jury_col), (Channel::Audience, audience_col)] {
            let cell = rec.get(col).unwrap_or("");
            let votes = parse_vote_input(cell, channel, rules.channel(channel).ceiling)
                .map_err(|e| in_context(format!("row {}", row), e))?;
            entry.set_votes(channel, votes);
        }
        groups.push(entry);
    }

    debug!("Ballot sheet: {} groups", groups.len());
    GroupSet::new(groups)
}

/// Reads a JSON array of `{ "juryVotes": n | null, "audienceVotes": n | null }`.
pub fn load_ballots_json<R: Read>(reader: R, rules: &ScoringRules) -> VbResult<GroupSet> {
    let set: GroupSet = serde_json::from_reader(reader)?;
    check_ballots(&set, rules)?;
    debug!("Ballot JSON: {} groups", set.len());
    Ok(set)
}

/// Range-checks every entered count against the active rules.
pub fn check_ballots(set: &GroupSet, rules: &ScoringRules) -> VbResult<()> {
    for (idx, entry) in set.iter().enumerate() {
        for channel in Channel::iter() {
            if let Some(votes) = entry.votes(channel) {
                check_range(votes as i64, channel, rules.channel(channel).ceiling)
                    .map_err(|e| in_context(format!("group {}", idx + 1), e))?;
            }
        }
    }
    Ok(())
}

pub fn load_ballots_from_file<P: AsRef<Path>>(path: P, rules: &ScoringRules) -> VbResult<GroupSet> {
    let path = path.as_ref();
    info!("📂 Loading Ballots: {}", path.display());

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("csv") => load_ballots_csv(File::open(path)?, rules),
        Some("json") => load_ballots_json(File::open(path)?, rules),
        _ => Err(VoteBarError::Config(format!(
            "unsupported ballot file '{}' (expected .csv or .json)",
            path.display()
        ))),
    }
}
