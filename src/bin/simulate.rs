//! Percolation threshold estimator CLI.
//!
//! Runs T independent trials on N-by-N grids and prints the sample mean,
//! sample standard deviation and 95% confidence interval of the threshold.
//!
//! Usage:
//!   cargo run --bin simulate -- <N> <T> [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate -- 200 100              # entropy-seeded run
//!   cargo run --bin simulate -- 200 100 --seed 42    # reproducible run
//!   cargo run --bin simulate -- 50 1000 --json       # JSON report on stdout

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use percolation::build_info;
use percolation::simulator::{run_experiment, StatsConfig};

#[derive(Parser)]
#[command(name = "simulate")]
#[command(version, long_version = build_info::LONG_VERSION)]
#[command(about = "Estimate the site percolation threshold by Monte Carlo simulation")]
struct Cli {
    /// Grid size N (N-by-N sites)
    #[arg(allow_negative_numbers = true)]
    n: i64,

    /// Number of independent trials T
    #[arg(allow_negative_numbers = true)]
    t: i64,

    /// RNG seed for a reproducible run
    #[arg(long, env = "PERCOLATION_SEED")]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Also write the JSON report to a timestamped file
    #[arg(long)]
    save: bool,

    /// Enable per-trial logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = StatsConfig::from_signed(cli.n, cli.t, cli.seed)?;
    info!(
        n = config.grid_size,
        trials = config.trials,
        seed = ?config.seed,
        "Running percolation experiment"
    );

    let report = run_experiment(&config)?;

    if cli.json {
        println!("{}", report.to_json());
    } else {
        print!("{}", report.to_text());
    }

    if cli.save {
        let filename = format!(
            "percolation_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())
            .with_context(|| format!("failed to write {filename}"))?;
        info!(path = %filename, "JSON report saved");
    }

    Ok(())
}
