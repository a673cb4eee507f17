//! Sequential Monte Carlo estimation of the Cooke-Nieboer index
//!
//! Each step draws four degrees with replacement, reduces them to the sign
//! of `X(4) + X(1) - X(2) - X(3)` and feeds that sign into a
//! [`RunningStats`]. The running mean is the index estimate; the loop stops
//! as soon as its standard error is below the configured tolerance.

use log::{debug, trace, warn};
use rand::Rng;

use super::config::IndexConfig;
use super::degree::{quadruple_sign, sample_quadruple, Degree, QUADRUPLE};
use crate::error::IndexError;
use crate::math;
use crate::statistics::RunningStats;
use crate::traits::ErrorBounds;

/// Result of one adaptive estimation run
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexEstimate {
    /// Index estimate, always within `[-1, 1]`
    pub value: f64,
    /// Standard error of `value` when the loop stopped
    pub standard_error: f64,
    /// Number of quadruples drawn
    pub samples: u64,
}

impl IndexEstimate {
    /// Normal-approximation interval `value ± z * standard_error`
    ///
    /// Bounds are clipped to `[-1, 1]`; `confidence` is `erf(|z| / √2)`.
    /// The sign of `z` is ignored.
    ///
    /// ```
    /// use tailindex::index::IndexEstimate;
    ///
    /// let est = IndexEstimate { value: 0.4, standard_error: 0.01, samples: 2_000 };
    /// let bounds = est.error_bounds(1.96);
    ///
    /// assert!(bounds.contains(0.4));
    /// assert!((bounds.confidence - 0.95).abs() < 1e-3);
    /// ```
    pub fn error_bounds(&self, z: f64) -> ErrorBounds {
        let z = z.abs();
        let half = z * self.standard_error;
        ErrorBounds::new(
            (self.value - half).max(-1.0),
            self.value,
            (self.value + half).min(1.0),
            math::erf(z / core::f64::consts::SQRT_2),
        )
    }
}

/// Adaptive estimator for the Cooke-Nieboer heavy-tailedness index
///
/// The estimator holds only its configuration; every call to
/// [`estimate`](Self::estimate) owns a fresh accumulator, so one estimator
/// and one degree slice can be shared across threads freely.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use tailindex::index::{IndexConfig, IndexEstimator};
///
/// let degrees: Vec<u32> = (1..=100).map(|i| 1000 / i).collect();
/// let estimator = IndexEstimator::new(IndexConfig::default().with_max_error(0.02));
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let estimate = estimator.estimate(&degrees, &mut rng).unwrap();
///
/// assert!(estimate.value > 0.0 && estimate.value <= 1.0);
/// assert!(estimate.standard_error < 0.02);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IndexEstimator {
    config: IndexConfig,
}

impl IndexEstimator {
    /// Create an estimator with the given configuration
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Run the sampling loop until the standard error is small enough
    ///
    /// Fails before drawing anything if the configuration is invalid or
    /// `degrees` holds fewer than four values. With `max_iterations` set,
    /// fails with [`IndexError::NotConverged`] once the cap is reached.
    pub fn estimate<D, R>(&self, degrees: &[D], rng: &mut R) -> Result<IndexEstimate, IndexError>
    where
        D: Degree,
        R: Rng + ?Sized,
    {
        if let Err(err) = self.config.validate() {
            trace!("rejecting index configuration: {err}");
            return Err(err);
        }
        if degrees.len() < QUADRUPLE {
            trace!("rejecting degree sequence of length {}", degrees.len());
            return Err(IndexError::InsufficientDegrees {
                found: degrees.len(),
            });
        }

        let IndexConfig {
            max_error,
            min_samples,
            max_iterations,
        } = self.config;
        let mut stats = RunningStats::new();

        loop {
            let quad = sample_quadruple(degrees, rng);
            stats.add(f64::from(quadruple_sign(&quad)));

            // count > min_samples >= 2 keeps the standard error defined
            if stats.len() > min_samples && stats.standard_error() < max_error {
                let estimate = IndexEstimate {
                    value: stats.mean(),
                    standard_error: stats.standard_error(),
                    samples: stats.len(),
                };
                debug!(
                    "index estimate {:.4} (se {:.5}) after {} samples",
                    estimate.value, estimate.standard_error, estimate.samples
                );
                return Ok(estimate);
            }

            if let Some(cap) = max_iterations {
                if stats.len() >= cap {
                    warn!(
                        "index estimate did not converge after {} samples (se {:.5}, target {})",
                        cap,
                        stats.standard_error(),
                        max_error
                    );
                    return Err(IndexError::NotConverged {
                        iterations: stats.len(),
                        standard_error: stats.standard_error(),
                        mean: stats.mean(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // heavy right tail: a few hubs, many low-degree nodes
    fn hub_degrees() -> [u32; 60] {
        let mut degrees = [1u32; 60];
        for (i, d) in degrees.iter_mut().enumerate() {
            *d = 600 / (i as u32 + 1);
        }
        degrees
    }

    #[test]
    fn test_degenerate_sequence_returns_zero() {
        let estimator = IndexEstimator::default();
        let mut rng = StdRng::seed_from_u64(1);

        let est = estimator.estimate(&[5u32, 5, 5, 5, 5], &mut rng).unwrap();

        assert_eq!(est.value, 0.0);
        assert_eq!(est.standard_error, 0.0);
        assert_eq!(est.samples, 21);
    }

    #[test]
    fn test_degenerate_respects_min_samples() {
        let estimator = IndexEstimator::new(IndexConfig::default().with_min_samples(50));
        let mut rng = StdRng::seed_from_u64(1);

        let est = estimator.estimate(&[3u8; 8], &mut rng).unwrap();
        assert_eq!(est.samples, 51);
    }

    #[test]
    fn test_heavy_right_tail_is_positive() {
        let estimator = IndexEstimator::new(IndexConfig::default().with_max_error(0.02));
        let mut rng = StdRng::seed_from_u64(2024);

        let est = estimator.estimate(&hub_degrees(), &mut rng).unwrap();

        assert!(est.value > 0.0 && est.value <= 1.0, "{est:?}");
        assert!(est.standard_error < 0.02);
        assert!(est.samples > 20);
    }

    #[test]
    fn test_left_skew_is_negative() {
        // most nodes near the maximum, a few isolated ones
        let mut degrees = [100u64; 40];
        degrees[..4].copy_from_slice(&[0, 1, 2, 3]);
        let estimator = IndexEstimator::new(IndexConfig::default().with_max_error(0.02));
        let mut rng = StdRng::seed_from_u64(5);

        let est = estimator.estimate(&degrees, &mut rng).unwrap();
        assert!(est.value < 0.0 && est.value >= -1.0, "{est:?}");
    }

    #[test]
    fn test_same_seed_same_estimate() {
        let estimator = IndexEstimator::default();
        let degrees = hub_degrees();

        let a = estimator
            .estimate(&degrees, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let b = estimator
            .estimate(&degrees, &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_short_sequences() {
        let estimator = IndexEstimator::default();
        let mut rng = StdRng::seed_from_u64(0);

        for len in 0..4 {
            let degrees = [3u32; 3];
            let err = estimator.estimate(&degrees[..len], &mut rng).unwrap_err();
            assert_eq!(err, IndexError::InsufficientDegrees { found: len });
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let mut rng = StdRng::seed_from_u64(0);
        let degrees = hub_degrees();

        let err = IndexEstimator::new(IndexConfig::new(0.0, 20))
            .estimate(&degrees, &mut rng)
            .unwrap_err();
        assert_eq!(err, IndexError::InvalidMaxError(0.0));

        let err = IndexEstimator::new(IndexConfig::new(0.01, 1))
            .estimate(&degrees, &mut rng)
            .unwrap_err();
        assert_eq!(err, IndexError::InvalidMinSamples(1));
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_parameters_checked_before_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = IndexEstimator::new(IndexConfig::new(-1.0, 20))
            .estimate(&[1u32], &mut rng)
            .unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_iteration_cap() {
        let config = IndexConfig::default()
            .with_max_error(1e-6)
            .with_max_iterations(500);
        let mut rng = StdRng::seed_from_u64(3);

        let err = IndexEstimator::new(config)
            .estimate(&hub_degrees(), &mut rng)
            .unwrap_err();

        match err {
            IndexError::NotConverged {
                iterations,
                standard_error,
                mean,
            } => {
                assert_eq!(iterations, 500);
                assert!(standard_error > 1e-6);
                assert!((-1.0..=1.0).contains(&mean));
            }
            other => panic!("expected NotConverged, got {other:?}"),
        }
    }

    #[test]
    fn test_cap_does_not_block_early_stop() {
        let config = IndexConfig::default().with_max_iterations(25);
        let mut rng = StdRng::seed_from_u64(3);

        let est = IndexEstimator::new(config)
            .estimate(&[8u16; 4], &mut rng)
            .unwrap();
        assert_eq!(est.samples, 21);
    }

    #[test]
    fn test_error_bounds_ignore_sign_of_z() {
        let est = IndexEstimate {
            value: 0.2,
            standard_error: 0.05,
            samples: 400,
        };

        let neg = est.error_bounds(-2.0);
        assert_eq!(neg, est.error_bounds(2.0));
        assert!(neg.lower <= neg.upper);
        assert!(neg.confidence > 0.0);
    }

    #[test]
    fn test_error_bounds_are_clipped() {
        let est = IndexEstimate {
            value: 0.99,
            standard_error: 0.01,
            samples: 100,
        };
        let bounds = est.error_bounds(3.0);

        assert_eq!(bounds.upper, 1.0);
        assert!((bounds.lower - 0.96).abs() < 1e-12);
        assert!(bounds.confidence > 0.997 && bounds.confidence < 0.998);
    }
}
