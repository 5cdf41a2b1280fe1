//! Reduction operations trait.

use crate::array::StatArray;
use crate::error::{Error, Result};
use crate::runtime::Runtime;

/// Whole-array reductions
///
/// Reductions are blocking: they return a host scalar, so the backend waits
/// for the device result.
pub trait ReduceOps<R: Runtime> {
    /// Sum of all elements, computed as a pairwise tree
    ///
    /// An empty array sums to `0.0`.
    fn sum(&self, a: &StatArray<R>) -> Result<f64>;

    /// Smallest element
    ///
    /// NaN elements are ignored unless every element is NaN.
    ///
    /// # Errors
    ///
    /// Returns `EmptyArray` for an empty array.
    fn min(&self, a: &StatArray<R>) -> Result<f64>;

    /// Largest element
    ///
    /// NaN elements are ignored unless every element is NaN.
    ///
    /// # Errors
    ///
    /// Returns `EmptyArray` for an empty array.
    fn max(&self, a: &StatArray<R>) -> Result<f64>;

    /// Sum of squared deviations from `center`: `sum((a[i] - center)^2)`
    fn sum_squared_deviations(&self, a: &StatArray<R>, center: f64) -> Result<f64>;

    /// Arithmetic mean: `sum / count`
    ///
    /// # Errors
    ///
    /// Returns `EmptyArray` for an empty array.
    fn mean(&self, a: &StatArray<R>) -> Result<f64> {
        if a.is_empty() {
            return Err(Error::EmptyArray { op: "mean" });
        }
        Ok(self.sum(a)? / a.len() as f64)
    }

    /// Variance with `ddof` delta degrees of freedom
    ///
    /// `ddof = 0` gives the population variance, `ddof = 1` the sample
    /// variance.
    ///
    /// # Errors
    ///
    /// Returns `EmptyArray` when `count <= ddof`.
    fn variance(&self, a: &StatArray<R>, ddof: usize) -> Result<f64> {
        let n = a.len();
        if n <= ddof {
            return Err(Error::EmptyArray { op: "variance" });
        }
        let mean = self.sum(a)? / n as f64;
        Ok(self.sum_squared_deviations(a, mean)? / (n - ddof) as f64)
    }

    /// Standard deviation: square root of [`variance`](Self::variance)
    fn std_dev(&self, a: &StatArray<R>, ddof: usize) -> Result<f64> {
        Ok(self.variance(a, ddof)?.sqrt())
    }
}
