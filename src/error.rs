//! Errors reported by the index estimator
//!
//! All validation happens before the sampling loop starts, so an error never
//! leaves partially consumed randomness behind a half-finished estimate.

use thiserror::Error;

/// Error returned by [`IndexEstimator`](crate::index::IndexEstimator) and
/// [`IndexConfig::validate`](crate::index::IndexConfig::validate)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
    /// Each draw needs four degrees
    #[error("degree sequence too short: need at least 4 degrees, found {found}")]
    InsufficientDegrees { found: usize },

    /// `max_error` must be finite and strictly positive
    #[error("invalid max_error: {0} (must be finite and > 0)")]
    InvalidMaxError(f64),

    /// `min_samples` must be at least 2 so the standard error is defined
    #[error("invalid min_samples: {0} (must be >= 2)")]
    InvalidMinSamples(u64),

    /// An iteration cap at or below `min_samples` can never stop normally
    #[error("invalid max_iterations: {0} (must exceed min_samples)")]
    InvalidIterationLimit(u64),

    /// The iteration cap was reached before the standard error dropped
    /// below `max_error`
    #[error(
        "not converged after {iterations} samples: standard error {standard_error} \
         (running mean {mean})"
    )]
    NotConverged {
        iterations: u64,
        standard_error: f64,
        mean: f64,
    },
}

impl IndexError {
    /// The degree sequence itself was unusable
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, IndexError::InsufficientDegrees { .. })
    }

    /// A tuning parameter was out of range
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            IndexError::InvalidMaxError(_)
                | IndexError::InvalidMinSamples(_)
                | IndexError::InvalidIterationLimit(_)
        )
    }
}
