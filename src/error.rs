//! Errors raised by the percolation model.

use thiserror::Error;

/// Percolation result type
pub type Result<T> = std::result::Result<T, PercolationError>;

/// Usage errors. Every variant is reported at the point of detection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
    #[error("invalid argument: {name} must be positive, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    #[error("site ({row}, {col}) is outside the {size}x{size} grid")]
    IndexOutOfRange { row: usize, col: usize, size: usize },
}

impl PercolationError {
    pub(crate) fn invalid(name: &'static str, value: usize) -> Self {
        Self::InvalidArgument {
            name,
            value: i64::try_from(value).unwrap_or(i64::MAX),
        }
    }
}

/// Convert a signed count into a positive `usize`, rejecting zero and negatives.
pub fn positive(name: &'static str, value: i64) -> Result<usize> {
    match usize::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(PercolationError::InvalidArgument { name, value }),
    }
}
