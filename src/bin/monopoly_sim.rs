//! Compare Monopoly house rules by simulating many games per ruleset.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use monopoly_sim::core::{Ruleset, SimulationConfig};
use monopoly_sim::simulation::{run_all, RulesetReport};

#[derive(Debug, Parser)]
#[command(name = "monopoly-sim", version)]
#[command(about = "Simulate Monopoly games under different house rules")]
struct Args {
    /// JSON simulation config; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Players per game
    #[arg(long)]
    players: Option<usize>,

    /// Games simulated per ruleset
    #[arg(long)]
    games: Option<usize>,

    /// Bootstrap resamples per ruleset
    #[arg(long)]
    resamples: Option<usize>,

    /// Rounds between rent increases
    #[arg(long)]
    interval: Option<u32>,

    /// Base random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Ruleset to run (repeatable): standard, free-parking-bonus,
    /// no-auctions, no-auctions-free-parking-bonus
    #[arg(long = "ruleset")]
    rulesets: Vec<Ruleset>,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to build thread pool")?;
    }

    let settings = load_settings(&args)?;
    log::info!(
        "{} players, {} games and {} resamples per ruleset, seed {}",
        settings.player_count,
        settings.games_per_ruleset,
        settings.resamples,
        settings.seed
    );

    let reports = run_all(&settings).context("simulation failed")?;

    if args.json {
        let json = serde_json::to_string_pretty(&reports).context("failed to encode reports")?;
        println!("{json}");
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_settings(args: &Args) -> Result<SimulationConfig> {
    let mut settings = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            SimulationConfig::from_json_str(&json)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };

    if let Some(players) = args.players {
        settings.player_count = players;
    }
    if let Some(games) = args.games {
        settings.games_per_ruleset = games;
    }
    if let Some(resamples) = args.resamples {
        settings.resamples = resamples;
    }
    if let Some(interval) = args.interval {
        settings.rent_escalation_interval = interval;
    }
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if !args.rulesets.is_empty() {
        settings.rulesets.clone_from(&args.rulesets);
    }

    settings.validate().context("invalid settings")?;
    Ok(settings)
}

fn print_report(report: &RulesetReport) {
    let summary = &report.summary;
    println!("== {} ({} games) ==", report.ruleset, report.games);
    println!("  Mean turns:              {}", fmt_stat(summary.mean_turns, ""));
    println!(
        "  Mean lap all bought:     {}",
        fmt_stat(summary.mean_first_purchase_lap, "")
    );
    println!(
        "  Games with all bought:   {}",
        fmt_stat(summary.percent_all_purchased, "%")
    );
    println!("  Wins:");
    for (player, wins) in report.wins.iter() {
        println!("    {player}: {wins}");
    }
    println!();
}

fn fmt_stat(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}{unit}"))
}
