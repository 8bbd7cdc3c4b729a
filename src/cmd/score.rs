use super::BallotSource;
use crate::reports;
use clap::Args;
use std::process;
use tracing::error;
use votebar::api::PreviewSession;
use votebar::config::Config;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub source: BallotSource,

    /// Print the report as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, session: &PreviewSession) {
    let report = session.report(&args.config.display);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("❌ Could not serialize report: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    reports::print_results_table(&report, &args.config.display);
}
