//! Cooke-Nieboer heavy-tailedness index
//!
//! The index characterises tail asymmetry of a degree distribution through
//! the sign of `X(4) + X(1) - X(2) - X(3)` over random quadruples. It lies in
//! `[-1, 1]`: values near 0 indicate balanced tails, values near 1 a heavy
//! right tail (hubs), values near -1 a heavy left tail.
//!
//! The estimate comes from sequential random sampling that stops once the
//! running standard error drops below a target, so repeated runs on the same
//! degrees spread by roughly that target.
//!
//! # Example
//!
//! ```
//! use tailindex::index::estimate_index_with;
//!
//! let degrees: Vec<usize> = (1..=200).map(|i| 2000 / i).collect();
//!
//! let index = estimate_index_with(&degrees, 0.02, 20).unwrap();
//! assert!((-1.0..=1.0).contains(&index));
//! ```
//!
//! Reproducible runs take a seed:
//!
//! ```
//! use tailindex::index::{estimate_index_seeded, IndexConfig};
//!
//! let degrees = [1u32, 1, 2, 2, 3, 5, 8, 40];
//! let a = estimate_index_seeded(&degrees, IndexConfig::default(), 7).unwrap();
//! let b = estimate_index_seeded(&degrees, IndexConfig::default(), 7).unwrap();
//! assert_eq!(a, b);
//! ```

mod config;
mod degree;
mod estimator;

pub use config::{IndexConfig, DEFAULT_MAX_ERROR, DEFAULT_MIN_SAMPLES};
pub use degree::{quadruple_sign, sample_quadruple, Degree, QUADRUPLE};
pub use estimator::{IndexEstimate, IndexEstimator};

use crate::error::IndexError;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Estimate the index with the default `max_error` (0.01) and `min_samples` (20)
#[cfg(feature = "std")]
pub fn estimate_index<D: Degree>(degrees: &[D]) -> Result<f64, IndexError> {
    estimate_index_with(degrees, DEFAULT_MAX_ERROR, DEFAULT_MIN_SAMPLES)
}

/// Estimate the index using the thread-local RNG
#[cfg(feature = "std")]
pub fn estimate_index_with<D: Degree>(
    degrees: &[D],
    max_error: f64,
    min_samples: u64,
) -> Result<f64, IndexError> {
    IndexEstimator::new(IndexConfig::new(max_error, min_samples))
        .estimate(degrees, &mut rand::rng())
        .map(|estimate| estimate.value)
}

/// Estimate the index from a seeded `StdRng`
pub fn estimate_index_seeded<D: Degree>(
    degrees: &[D],
    config: IndexConfig,
    seed: u64,
) -> Result<IndexEstimate, IndexError> {
    let mut rng = StdRng::seed_from_u64(seed);
    IndexEstimator::new(config).estimate(degrees, &mut rng)
}
