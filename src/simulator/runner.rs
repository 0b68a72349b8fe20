//! Trial loop and threshold aggregation.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::config::StatsConfig;
use super::report::StatsReport;
use crate::error::{PercolationError, Result};
use crate::grid::PercolationGrid;
use crate::site_source::SiteSource;
use crate::stats;

/// Result of one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    /// Sites opened when the grid first percolated
    pub opened_sites: usize,
    /// `opened_sites / n²`
    pub threshold: f64,
}

/// Open random blocked sites on a fresh `n`-by-`n` grid until it percolates.
///
/// Draws that land on an already open site are discarded. Row is drawn
/// before column.
pub fn run_trial<S: SiteSource + ?Sized>(n: usize, source: &mut S) -> Result<TrialOutcome> {
    let mut grid = PercolationGrid::new(n)?;
    let mut opened_sites = 0;

    while !grid.percolates() {
        let row = source.uniform(1, n);
        let col = source.uniform(1, n);
        if !grid.is_open(row, col)? {
            grid.open(row, col)?;
            opened_sites += 1;
        }
    }

    Ok(TrialOutcome {
        opened_sites,
        threshold: opened_sites as f64 / (n * n) as f64,
    })
}

/// Thresholds from `T` independent trials on `N`-by-`N` grids.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Run `trials` experiments on `n`-by-`n` grids, drawing sites from `source`.
    ///
    /// Every requested trial is run, so no slot is left at its initial zero.
    pub fn new<S: SiteSource + ?Sized>(n: usize, trials: usize, source: &mut S) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::invalid("grid size", n));
        }
        if trials == 0 {
            return Err(PercolationError::invalid("trials", trials));
        }

        let mut thresholds = vec![0.0; trials];
        for (trial, slot) in thresholds.iter_mut().enumerate() {
            let outcome = run_trial(n, source)?;
            debug!(
                trial = trial + 1,
                opened = outcome.opened_sites,
                threshold = outcome.threshold,
                "Trial percolated"
            );
            *slot = outcome.threshold;
        }

        Ok(Self {
            grid_size: n,
            thresholds,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial thresholds in run order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.thresholds)
    }

    /// Sample standard deviation of the percolation threshold.
    ///
    /// NaN when only one trial was run.
    pub fn stddev(&self) -> f64 {
        stats::stddev(&self.thresholds)
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        stats::confidence_interval(self.mean(), self.stddev(), self.trials()).0
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        stats::confidence_interval(self.mean(), self.stddev(), self.trials()).1
    }
}

/// Run the configured experiment with a ChaCha8 stream and return a report.
pub fn run_experiment(config: &StatsConfig) -> Result<StatsReport> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let started = Instant::now();
    let stats = PercolationStats::new(config.grid_size, config.trials, &mut rng)?;
    let elapsed = started.elapsed();

    info!(
        n = config.grid_size,
        trials = config.trials,
        mean = stats.mean(),
        stddev = stats.stddev(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Experiment complete"
    );

    Ok(StatsReport::from_stats(&stats, config.seed, elapsed))
}
