//! Summary statistics over threshold samples.

/// z-score of the two-sided 95% Gaussian interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (denominator `n - 1`).
///
/// A single sample has no spread estimate and yields NaN.
pub fn stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let mu = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - mu) * (v - mu)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// `(lo, hi)` of the 95% confidence interval around `mean`.
pub fn confidence_interval(mean: f64, stddev: f64, samples: usize) -> (f64, f64) {
    let half_width = CONFIDENCE_95 * stddev / (samples as f64).sqrt();
    (mean - half_width, mean + half_width)
}
