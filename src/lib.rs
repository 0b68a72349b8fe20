//! Percolation - Monte Carlo estimation of the site percolation threshold.
//!
//! [`grid::PercolationGrid`] tracks open sites and their connectivity on an
//! N×N grid; [`simulator`] runs repeated randomized trials against it and
//! summarizes the thresholds.

pub mod build_info;
pub mod error;
pub mod grid;
pub mod simulator;
pub mod site_source;
pub mod stats;
pub mod union_find;

pub use error::{PercolationError, Result};
pub use grid::PercolationGrid;
pub use simulator::{PercolationStats, StatsConfig, StatsReport};
pub use site_source::SiteSource;
