//! Running statistics (mean, variance, standard error)
//!
//! Computes streaming statistics using Welford's numerically stable online algorithm.
//! Supports merging for pooling independent runs.

use crate::math;
use crate::traits::Sketch;

/// Running statistics calculator using Welford's algorithm
///
/// Tracks the count, the running mean and the sum of squared deviations
/// (`m2`) in O(1) memory. Sample variance, standard deviation and the
/// standard error of the mean are derived from that triple on demand.
///
/// Accessors that need at least two observations return `NaN` below that.
///
/// # Example
///
/// ```
/// use tailindex::statistics::RunningStats;
///
/// let mut stats = RunningStats::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.add(value);
/// }
///
/// assert_eq!(stats.len(), 8);
/// assert!((stats.mean() - 5.0).abs() < 1e-12);
/// assert!((stats.sample_variance() - 32.0 / 7.0).abs() < 1e-12);
/// assert!((stats.standard_error() - (32.0f64 / 7.0 / 8.0).sqrt()).abs() < 1e-12);
/// ```
///
/// # Pooling runs
///
/// ```
/// use tailindex::statistics::RunningStats;
/// use tailindex::traits::Sketch;
///
/// let mut run1: RunningStats = [1.0, 2.0, 3.0].into_iter().collect();
/// let run2: RunningStats = [4.0, 5.0, 6.0].into_iter().collect();
///
/// run1.merge(&run2);
/// assert_eq!(run1.len(), 6);
/// assert!((run1.mean() - 3.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningStats {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from mean (M2 in Welford's algorithm)
    m2: f64,
}

impl RunningStats {
    /// Create a new empty statistics accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Return to the empty state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Add a value to the statistics
    ///
    /// NaN values are ignored to prevent poisoning the statistics: they do
    /// not advance the count, so `len()` counts non-NaN values only.
    pub fn add(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }

        self.count += 1;

        // delta2 must use the updated mean
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Get the number of values
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the mean (0 when empty)
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sum of squared deviations from the mean
    pub fn sum_sq_dev(&self) -> f64 {
        self.m2.max(0.0)
    }

    /// Get the population variance (`m2 / n`)
    ///
    /// `NaN` when empty.
    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.sum_sq_dev() / self.count as f64
        }
    }

    /// Get the sample variance (`m2 / (n - 1)`, Bessel's correction)
    ///
    /// `NaN` with fewer than two values. Round-off below zero is clamped.
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            f64::NAN
        } else {
            self.sum_sq_dev() / (self.count - 1) as f64
        }
    }

    /// Get the sample standard deviation
    pub fn sample_stdev(&self) -> f64 {
        math::sqrt(self.sample_variance())
    }

    /// Standard error of the mean, `stdev / sqrt(n)`
    pub fn standard_error(&self) -> f64 {
        self.sample_stdev() / math::sqrt(self.count as f64)
    }

    /// Merge with another RunningStats using parallel algorithm
    ///
    /// Uses Chan et al.'s parallel algorithm for combining statistics.
    pub fn merge_stats(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let combined_count = self.count + other.count;
        let delta = other.mean - self.mean;

        let combined_mean = self.mean + delta * (other.count as f64 / combined_count as f64);

        let combined_m2 = self.m2
            + other.m2
            + delta * delta * (self.count as f64 * other.count as f64 / combined_count as f64);

        self.count = combined_count;
        self.mean = combined_mean;
        self.m2 = combined_m2;
    }
}

impl Sketch for RunningStats {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn merge(&mut self, other: &Self) {
        self.merge_stats(other);
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Extend<f64> for RunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
