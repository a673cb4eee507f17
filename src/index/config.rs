//! Tuning parameters for the adaptive stopping rule

use crate::error::IndexError;

/// Default target standard error of the estimate
pub const DEFAULT_MAX_ERROR: f64 = 0.01;

/// Default number of samples that must be exceeded before stopping is considered
pub const DEFAULT_MIN_SAMPLES: u64 = 20;

/// Configuration for [`IndexEstimator`](super::IndexEstimator)
///
/// The loop stops once more than `min_samples` quadruples have been drawn
/// and the running standard error is below `max_error`. `max_iterations`
/// optionally bounds the loop; without it termination is only probabilistic.
///
/// # Example
///
/// ```
/// use tailindex::index::IndexConfig;
///
/// let config = IndexConfig::default()
///     .with_max_error(0.02)
///     .with_max_iterations(1_000_000);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.min_samples, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexConfig {
    /// Stop once the standard error falls below this
    pub max_error: f64,
    /// Never stop with this many samples or fewer
    pub min_samples: u64,
    /// Give up with [`IndexError::NotConverged`] after this many samples
    pub max_iterations: Option<u64>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_error: DEFAULT_MAX_ERROR,
            min_samples: DEFAULT_MIN_SAMPLES,
            max_iterations: None,
        }
    }
}

impl IndexConfig {
    /// Create a configuration with the given stopping parameters and no cap
    pub fn new(max_error: f64, min_samples: u64) -> Self {
        Self {
            max_error,
            min_samples,
            max_iterations: None,
        }
    }

    /// Set the target standard error
    pub fn with_max_error(mut self, max_error: f64) -> Self {
        self.max_error = max_error;
        self
    }

    /// Set the sample count that must be exceeded before stopping
    pub fn with_min_samples(mut self, min_samples: u64) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Bound the loop at `max_iterations` samples
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Check every parameter range
    pub fn validate(&self) -> Result<(), IndexError> {
        if !self.max_error.is_finite() || self.max_error <= 0.0 {
            return Err(IndexError::InvalidMaxError(self.max_error));
        }
        if self.min_samples < 2 {
            return Err(IndexError::InvalidMinSamples(self.min_samples));
        }
        match self.max_iterations {
            Some(cap) if cap <= self.min_samples => Err(IndexError::InvalidIterationLimit(cap)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IndexConfig::default();
        assert_eq!(config.max_error, 0.01);
        assert_eq!(config.min_samples, 20);
        assert_eq!(config.max_iterations, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = IndexConfig::new(0.05, 10).with_max_iterations(500);
        assert_eq!(config.max_error, 0.05);
        assert_eq!(config.min_samples, 10);
        assert_eq!(config.max_iterations, Some(500));

        let config = config.with_min_samples(30).with_max_error(0.1);
        assert_eq!(config.min_samples, 30);
        assert_eq!(config.max_error, 0.1);
    }

    #[test]
    fn test_rejects_bad_max_error() {
        for bad in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let err = IndexConfig::default().with_max_error(bad).validate().unwrap_err();
            assert!(matches!(err, IndexError::InvalidMaxError(_)), "{bad}: {err:?}");
        }
    }

    #[test]
    fn test_rejects_bad_min_samples() {
        assert_eq!(
            IndexConfig::default().with_min_samples(1).validate(),
            Err(IndexError::InvalidMinSamples(1))
        );
        assert_eq!(
            IndexConfig::default().with_min_samples(0).validate(),
            Err(IndexError::InvalidMinSamples(0))
        );
        assert!(IndexConfig::default().with_min_samples(2).validate().is_ok());
    }

    #[test]
    fn test_rejects_unreachable_cap() {
        assert_eq!(
            IndexConfig::default().with_max_iterations(20).validate(),
            Err(IndexError::InvalidIterationLimit(20))
        );
        assert!(IndexConfig::default().with_max_iterations(21).validate().is_ok());
    }
}
