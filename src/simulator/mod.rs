//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial opens uniformly random blocked sites on a fresh grid until it
//! percolates and records the fraction of sites that had to be opened. The
//! sample of thresholds is summarized as a mean, a sample standard deviation
//! and a 95% confidence interval.

mod config;
mod report;
mod runner;

pub use config::StatsConfig;
pub use report::StatsReport;
pub use runner::{run_experiment, run_trial, PercolationStats, TrialOutcome};
