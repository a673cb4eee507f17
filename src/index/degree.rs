//! Degree values and the quadruple sign statistic

use rand::Rng;

/// Number of degrees drawn per sample
pub const QUADRUPLE: usize = 4;

/// A non-negative integer usable as a node degree
pub trait Degree: Copy {
    fn degree(self) -> u64;
}

macro_rules! impl_degree {
    ($($t:ty),*) => {
        $(
            impl Degree for $t {
                #[inline]
                fn degree(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_degree!(u8, u16, u32, u64, usize);

/// Draw four degrees independently and uniformly, with replacement
///
/// # Panics
///
/// Panics if `degrees` is empty.
pub fn sample_quadruple<D, R>(degrees: &[D], rng: &mut R) -> [u64; QUADRUPLE]
where
    D: Degree,
    R: Rng + ?Sized,
{
    core::array::from_fn(|_| degrees[rng.random_range(0..degrees.len())].degree())
}

/// Sign of `max + min - (x1 + x2 + x3 + x4) / 2`
///
/// Equivalent to `sign(X(4) + X(1) - X(2) - X(3))` on the order statistics.
/// Evaluated as `2 * (max + min) - sum` in `u128`, so the result is exact
/// for every `u64` input.
///
/// ```
/// use tailindex::index::quadruple_sign;
///
/// assert_eq!(quadruple_sign(&[1, 1, 1, 10]), 1);
/// assert_eq!(quadruple_sign(&[1, 10, 10, 10]), -1);
/// assert_eq!(quadruple_sign(&[1, 2, 3, 4]), 0);
/// ```
pub fn quadruple_sign(quad: &[u64; QUADRUPLE]) -> i8 {
    let mut lo = u64::MAX;
    let mut hi = 0u64;
    let mut sum = 0u128;
    for &x in quad {
        lo = lo.min(x);
        hi = hi.max(x);
        sum += u128::from(x);
    }

    let extremes = 2 * (u128::from(hi) + u128::from(lo));
    match extremes.cmp(&sum) {
        core::cmp::Ordering::Greater => 1,
        core::cmp::Ordering::Less => -1,
        core::cmp::Ordering::Equal => 0,
    }
}
