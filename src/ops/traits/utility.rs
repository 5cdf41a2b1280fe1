//! Sequence generator trait.

use crate::array::StatArray;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::runtime::Runtime;

/// Number of elements `arange(start, end)` produces
///
/// The span `end - start` rounded up, or 0 when `end <= start`.
///
/// # Errors
///
/// Returns `InvalidArgument` for non-finite bounds and `OutOfMemory` when the
/// count does not fit in `usize`.
pub fn arange_len(start: f64, end: f64) -> Result<usize> {
    if !start.is_finite() || !end.is_finite() {
        return Err(Error::invalid_argument(
            "range",
            format!("bounds must be finite, got [{start}, {end})"),
        ));
    }
    let span = (end - start).ceil();
    if span <= 0.0 {
        return Ok(0);
    }
    // `usize::MAX as f64` rounds up to 2^64, so `>=` catches every overflow
    if span >= usize::MAX as f64 {
        return Err(Error::OutOfMemory { size: usize::MAX });
    }
    Ok(span as usize)
}

/// Deterministic array generators
pub trait UtilityOps<R: Runtime> {
    /// Values `start, start + 1, ...` below `end`
    ///
    /// The count is `ceil(end - start)`, or 0 when `end <= start`.
    ///
    /// # Errors
    ///
    /// An extreme span fails with `OutOfMemory` before any device work: the
    /// byte size is checked for overflow and against the client's memory
    /// limit, and a device refusal is reported the same way.
    ///
    /// # Example
    ///
    /// ```
    /// # use statarray::prelude::*;
    /// # let client = CpuRuntime::create_client(&RuntimeConfig::default())?;
    /// let r = client.arange(2.0, 6.0, DType::F64)?;
    /// assert_eq!(r.to_vec::<f64>()?, vec![2.0, 3.0, 4.0, 5.0]);
    /// # Ok::<(), statarray::error::Error>(())
    /// ```
    fn arange(&self, start: f64, end: f64, dtype: DType) -> Result<StatArray<R>>;

    /// `count` copies of `value`
    fn full(&self, count: usize, value: f64, dtype: DType) -> Result<StatArray<R>>;

    /// `count` zeros
    fn zeros(&self, count: usize, dtype: DType) -> Result<StatArray<R>> {
        self.full(count, 0.0, dtype)
    }
}
