use super::BallotSource;
use crate::reports;
use clap::Args;
use std::process;
use tracing::error;
use votebar::api::PreviewSession;
use votebar::config::Config;

#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub source: BallotSource,

    /// Only explain the group at this 1-based position
    #[arg(short, long)]
    pub only: Option<usize>,
}

pub fn run(args: ExplainArgs, session: &PreviewSession) {
    let report = session.report(&args.config.display);
    let rules = &session.scorer().rules;

    if let Some(only) = args.only {
        if only == 0 || only > report.groups.len() {
            error!(
                "❌ --only must be between 1 and {}, got {}",
                report.groups.len(),
                only
            );
            process::exit(1);
        }
    }

    println!("\n🔎 === CALCULATION DETAILS === 🔎");
    for (idx, group) in report.groups.iter().enumerate() {
        if let Some(only) = args.only {
            if only != idx + 1 {
                continue;
            }
        }
        reports::print_group_breakdown(group, &report, rules, &args.config.display);
    }
}
