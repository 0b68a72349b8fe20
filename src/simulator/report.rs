//! Experiment report generation.

use std::time::Duration;

use serde::Serialize;

use super::runner::PercolationStats;

/// Summary of a finished experiment.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub grid_size: usize,
    pub trials: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    pub mean: f64,
    pub stddev: f64,
    pub confidence_lo: f64,
    pub confidence_hi: f64,

    pub elapsed_secs: f64,

    // Individual thresholds for further analysis
    pub thresholds: Vec<f64>,
}

impl StatsReport {
    pub fn from_stats(stats: &PercolationStats, seed: Option<u64>, elapsed: Duration) -> Self {
        Self {
            grid_size: stats.grid_size(),
            trials: stats.trials(),
            seed,
            mean: stats.mean(),
            stddev: stats.stddev(),
            confidence_lo: stats.confidence_lo(),
            confidence_hi: stats.confidence_hi(),
            elapsed_secs: elapsed.as_secs_f64(),
            thresholds: stats.thresholds().to_vec(),
        }
    }

    /// The three summary lines printed by the CLI.
    pub fn to_text(&self) -> String {
        format!(
            "mean                    = {}\n\
             stddev                  = {}\n\
             95% confidence interval = {}, {}\n",
            self.mean, self.stddev, self.confidence_lo, self.confidence_hi
        )
    }

    /// Pretty JSON for further analysis.
    ///
    /// NaN statistics (single trial) serialize as `null`.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> StatsReport {
        StatsReport {
            grid_size: 2,
            trials: 2,
            seed: Some(9),
            mean: 0.625,
            stddev: 0.25,
            confidence_lo: 0.5,
            confidence_hi: 0.75,
            elapsed_secs: 0.0,
            thresholds: vec![0.5, 0.75],
        }
    }

    #[test]
    fn test_text_report_lines() {
        let text = sample_report().to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "mean                    = 0.625");
        assert_eq!(lines[1], "stddev                  = 0.25");
        assert_eq!(lines[2], "95% confidence interval = 0.5, 0.75");
    }

    #[test]
    fn test_json_report_fields() {
        let json: serde_json::Value = serde_json::from_str(&sample_report().to_json()).unwrap();
        assert_eq!(json["grid_size"], 2);
        assert_eq!(json["seed"], 9);
        assert_eq!(json["mean"], 0.625);
        assert_eq!(json["thresholds"][1], 0.75);
    }

    #[test]
    fn test_json_omits_missing_seed_and_nulls_nan() {
        let report = StatsReport {
            seed: None,
            stddev: f64::NAN,
            ..sample_report()
        };
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert!(json.get("seed").is_none());
        assert!(json["stddev"].is_null());
    }
}
