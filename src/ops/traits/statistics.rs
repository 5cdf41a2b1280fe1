//! Order statistics trait.

use crate::array::StatArray;
use crate::error::Result;
use crate::runtime::Runtime;

/// Lower quartile, median, and upper quartile of one array
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quartiles {
    /// Median of the lower half
    pub lower: f64,
    /// Median of the whole array
    pub median: f64,
    /// Median of the upper half
    pub upper: f64,
}

impl Quartiles {
    /// Interquartile range: `upper - lower`
    pub fn iqr(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Order statistics over a full sort of the array
///
/// # Quartile convention
///
/// Quartiles are medians of halves. For a sorted array `s` of `n` elements,
/// the lower half is `s[0..n/2]` and the upper half is `s[n - n/2..n]`, so for
/// odd `n` the central element belongs to neither half. A single-element
/// array has that element as both quartiles.
///
/// If the array is already marked sorted (by `sort()` or `sorted()`), values
/// are read directly from it; otherwise a sorted copy is made. Only the one or
/// two elements each statistic needs are transferred to the host.
///
/// # Example
///
/// ```
/// # use statarray::prelude::*;
/// # let client = CpuRuntime::create_client(&RuntimeConfig::default())?;
/// let a = StatArray::<CpuRuntime>::from_slice(&client, &[4.0f64, 1.0, 3.0, 2.0])?;
/// let q = client.quartiles(&a)?;
/// assert_eq!((q.lower, q.median, q.upper), (1.5, 2.5, 3.5));
/// assert_eq!(client.iqr(&a)?, 2.0);
/// # Ok::<(), statarray::error::Error>(())
/// ```
pub trait StatisticalOps<R: Runtime> {
    /// Median: the middle element, or the mean of the two middle elements
    ///
    /// # Errors
    ///
    /// Returns `EmptyArray` for an empty array.
    fn median(&self, a: &StatArray<R>) -> Result<f64>;

    /// Median of the lower half
    fn lower_quartile(&self, a: &StatArray<R>) -> Result<f64>;

    /// Median of the upper half
    fn upper_quartile(&self, a: &StatArray<R>) -> Result<f64>;

    /// Interquartile range: `upper_quartile - lower_quartile`
    fn iqr(&self, a: &StatArray<R>) -> Result<f64>;

    /// All three quartiles from a single sort
    fn quartiles(&self, a: &StatArray<R>) -> Result<Quartiles>;

    /// Quantile `q` in `[0, 1]`, linearly interpolated at position `q * (n - 1)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `q` is outside `[0, 1]` or NaN, and
    /// `EmptyArray` for an empty array.
    fn quantile(&self, a: &StatArray<R>, q: f64) -> Result<f64>;

    /// Winsorized copy of `a`
    ///
    /// With `k = floor(fraction * n)`, every element below the k-th smallest
    /// value is raised to it and every element above the k-th largest value
    /// is lowered to it. Element order is preserved.
    ///
    /// NaN elements are left as NaN and do not count toward `n`: ranks are
    /// taken over the non-NaN values only.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `0 <= fraction < 0.5`.
    fn winsorize(&self, a: &StatArray<R>, fraction: f64) -> Result<StatArray<R>>;
}
