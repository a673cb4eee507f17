//! Statistical summaries for streaming data
//!
//! This module provides algorithms for computing statistics over streams
//! in a single pass with constant memory.
//!
//! # Example
//!
//! ```
//! use tailindex::statistics::RunningStats;
//!
//! let mut stats = RunningStats::new();
//!
//! for value in [1.0, -1.0, 0.0, 1.0, 1.0] {
//!     stats.add(value);
//! }
//!
//! println!("Mean: {}", stats.mean());
//! println!("Stdev: {}", stats.sample_stdev());
//! println!("Standard error: {}", stats.standard_error());
//! ```

mod moments;

pub use moments::RunningStats;
