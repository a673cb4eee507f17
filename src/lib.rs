//! # Tailindex
//!
//! Adaptive Monte Carlo estimation of the Cooke-Nieboer heavy-tailedness
//! index for network degree sequences.
//!
//! The index is a scalar in `[-1, 1]` derived from the signs of
//! `X(4) + X(1) - X(2) - X(3)` over random quadruples of degrees. Instead of
//! enumerating all quadruples, the estimator samples them one at a time and
//! stops once the standard error of the running mean drops below a target.
//!
//! ## Features
//!
//! - **Running Statistics**: Welford's online mean/variance/standard error in O(1) memory
//! - **Index Estimation**: sequential sampling with a data-driven stopping rule
//! - **Mergeability**: independent runs can be pooled with [`Sketch::merge`](traits::Sketch::merge)
//! - **Error Bounds**: normal-approximation intervals on every estimate
//!
//! ## Quick Start
//!
//! ```rust
//! use tailindex::prelude::*;
//!
//! // Degrees of a small hub-and-spoke network
//! let degrees = [12u32, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 2, 2];
//!
//! let index = estimate_index(&degrees).unwrap();
//! println!("Cooke-Nieboer index: ~{:.2}", index);
//! ```
//!
//! ## Parallel Runs
//!
//! An estimator owns no mutable state and the degrees are only read, so
//! several runs can share both:
//!
//! ```rust
//! use tailindex::index::IndexEstimator;
//! use tailindex::statistics::RunningStats;
//!
//! let degrees: Vec<u64> = (1..=50).map(|i| 500 / i).collect();
//! let estimator = IndexEstimator::default();
//! let (estimator, degrees) = (&estimator, &degrees);
//!
//! let runs: RunningStats = std::thread::scope(|s| {
//!     let handles: Vec<_> = (0..4)
//!         .map(|_| s.spawn(move || estimator.estimate(degrees, &mut rand::rng()).unwrap().value))
//!         .collect();
//!     handles.into_iter().map(|h| h.join().unwrap()).collect()
//! });
//! assert_eq!(runs.len(), 4);
//! ```
//!
//! ## Feature Flags
//!
//! Algorithm families:
//! - `statistics` (default): Running moments
//! - `index` (default): Cooke-Nieboer index estimation (implies `statistics`)
//! - `full`: Enable all algorithm families
//!
//! Platform features:
//! - `std` (default): Standard library support and thread-local RNG helpers
//! - `serde`: Enable serialization

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core traits always available
pub mod error;
pub mod traits;

mod math;

#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
pub mod statistics;

#[cfg(feature = "index")]
#[cfg_attr(docsrs, doc(cfg(feature = "index")))]
pub mod index;

pub mod prelude {
    pub use crate::error::IndexError;
    pub use crate::traits::*;

    #[cfg(feature = "statistics")]
    pub use crate::statistics::RunningStats;

    #[cfg(feature = "index")]
    pub use crate::index::{IndexConfig, IndexEstimate, IndexEstimator};

    #[cfg(all(feature = "index", feature = "std"))]
    pub use crate::index::{estimate_index, estimate_index_with};
}

pub use error::IndexError;

#[cfg(feature = "statistics")]
pub use statistics::RunningStats;

#[cfg(feature = "index")]
pub use index::{IndexConfig, IndexEstimate, IndexEstimator};

#[cfg(all(feature = "index", feature = "std"))]
pub use index::estimate_index;
