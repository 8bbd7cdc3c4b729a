use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, warn, Level};
use votebar::api::PreviewSession;
use votebar::config::ScoringRules;
use votebar::scorer::Scorer;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with scoring rules; explicit rule flags still win.
    #[arg(global = true, long)]
    rules: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a round and print one row per group.
    Score(cmd::score::ScoreArgs),
    /// Show how each group's scores were derived.
    Explain(cmd::explain::ExplainArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (config, source, sub_name) = match &cli.command {
        Commands::Score(args) => (&args.config, &args.source, "score"),
        Commands::Explain(args) => (&args.config, &args.source, "explain"),
    };

    // Rule flags live on the subcommand, so overrides are read from its matches.
    let rules = match &cli.rules {
        Some(path) => {
            info!("⚖️  Loading Rules from: {}", path);
            let mut file_rules = ScoringRules::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ Could not load rules '{}': {}", path, e);
                process::exit(1);
            });
            if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
                file_rules.merge_from_cli(&config.rules, sub_matches);
            }
            file_rules
        }
        None => config.rules.clone(),
    };

    let scorer = Scorer::new(rules).unwrap_or_else(|e| {
        error!("❌ Invalid scoring rules: {}", e);
        process::exit(1);
    });

    let session = source
        .resolve(&scorer.rules)
        .and_then(|ballots| PreviewSession::from_ballots(ballots, scorer));

    let session = match session {
        Ok(s) => s,
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    };

    if session.ballots().iter().all(|b| b.jury_votes.is_none() && b.audience_votes.is_none()) {
        warn!("No ballots entered yet; every group sits on the floor score.");
    }

    match cli.command {
        Commands::Score(args) => cmd::score::run(args, &session),
        Commands::Explain(args) => cmd::explain::run(args, &session),
    }
}
