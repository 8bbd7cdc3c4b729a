use votebar::api::{build_report, PreviewSession};
use votebar::ballot::{BallotEntry, Channel, GroupSet};
use votebar::config::DisplayParams;
use votebar::scorer::Scorer;

#[test]
fn test_session_edits_drive_fresh_results() {
    let mut session = PreviewSession::new(3, Scorer::default()).unwrap();
    assert!(session.results().iter().all(|r| r.total_score == 20.0));

    session.set_vote(0, Channel::Jury, "70").unwrap();
    session.set_vote(0, Channel::Audience, "120").unwrap();
    session.set_vote(1, Channel::Jury, "0").unwrap();

    let results = session.results();
    assert_eq!(results[0].total_score, 100.0);
    assert_eq!(results[0].height_percent, 100.0);
    assert_eq!(results[1].total_score, 20.0);
    assert_eq!(results[2].total_score, 20.0);

    // lowering the leader rescales everyone against the new maximum
    session.set_vote(0, Channel::Jury, "").unwrap();
    session.set_vote(1, Channel::Jury, "35").unwrap();
    let results = session.results();
    assert_eq!(results[0].jury_score, 14.0);
    assert_eq!(results[1].jury_score, 14.0 + 56.0 * 0.5);
}

#[test]
fn test_report_labels_and_rounding() {
    let set = GroupSet::new(vec![
        BallotEntry::new(Some(23), Some(47)),
        BallotEntry::new(Some(41), None),
    ])
    .unwrap();
    let scorer = Scorer::default();
    let report = build_report(&scorer, &set, &DisplayParams::default());
    let raw = scorer.score_round(&set);

    assert_eq!(report.max_jury, 41);
    assert_eq!(report.max_audience, 47);
    assert_eq!(report.groups[0].label, "Group 1");
    assert_eq!(report.groups[1].label, "Group 2");

    for (g, r) in report.groups.iter().zip(&raw) {
        assert!((g.total_score - r.total_score).abs() <= 0.005);
        assert_eq!(g.total_score, (r.total_score * 100.0).round() / 100.0);
    }

    // bonus only shown for channels with a ballot
    assert!(report.groups[0].audience_bonus.is_some());
    assert_eq!(report.groups[1].audience_bonus, None);
    assert_eq!(report.groups[1].audience_votes, None);
}

#[test]
fn test_report_serializes_camel_case() {
    let mut session = PreviewSession::new(2, Scorer::default()).unwrap();
    session.set_count(0, Channel::Jury, Some(10)).unwrap();

    let json = serde_json::to_value(session.report(&DisplayParams::default())).unwrap();
    assert_eq!(json["maxJury"], 10);
    // leader on 10 of 70 jury votes: 14 + 56 * 10/70
    assert_eq!(json["groups"][0]["juryScore"], 22.0);
    assert_eq!(json["groups"][0]["totalScore"], 28.0);
    assert_eq!(json["groups"][0]["heightPercent"], 31.03);
    assert!(json["groups"][1]["juryBonus"].is_null());
}

#[test]
fn test_from_ballots_rejects_out_of_range() {
    let set = GroupSet::new(vec![
        BallotEntry::new(Some(71), None),
        BallotEntry::default(),
    ])
    .unwrap();
    assert!(PreviewSession::from_ballots(set, Scorer::default()).is_err());
}
