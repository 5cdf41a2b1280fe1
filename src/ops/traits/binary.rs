//! Binary operations trait.
//!
//! This trait defines element-wise vector-vector operations on arrays.

use crate::array::StatArray;
use crate::error::Result;
use crate::runtime::Runtime;

/// Element-wise binary operations on arrays.
///
/// Both operands must have the same element count and the same dtype; there
/// is no broadcasting between vectors (see [`ScalarOps`](super::ScalarOps)
/// for scalar broadcast). The output is always a newly allocated array and
/// neither operand is modified.
///
/// # Errors
///
/// - `ShapeMismatch` if the counts differ (both counts are reported)
/// - `DTypeMismatch` if the element types differ
/// - `OutOfMemory` if the output cannot be allocated
///
/// # Example
///
/// ```
/// use statarray::prelude::*;
///
/// let client = CpuRuntime::create_client(&RuntimeConfig::default())?;
/// let a = StatArray::<CpuRuntime>::from_slice(&client, &[1.0f64, 2.0, 3.0])?;
/// let b = StatArray::<CpuRuntime>::from_slice(&client, &[4.0f64, 5.0, 6.0])?;
///
/// let c = client.add(&a, &b)?;
/// assert_eq!(c.to_vec::<f64>()?, vec![5.0, 7.0, 9.0]);
/// # Ok::<(), statarray::error::Error>(())
/// ```
pub trait BinaryOps<R: Runtime> {
    /// Element-wise addition: `a[i] + b[i]`
    fn add(&self, a: &StatArray<R>, b: &StatArray<R>) -> Result<StatArray<R>>;

    /// Element-wise subtraction: `a[i] - b[i]`
    fn sub(&self, a: &StatArray<R>, b: &StatArray<R>) -> Result<StatArray<R>>;

    /// Element-wise multiplication: `a[i] * b[i]`
    fn mul(&self, a: &StatArray<R>, b: &StatArray<R>) -> Result<StatArray<R>>;

    /// Element-wise division: `a[i] / b[i]`
    ///
    /// Division by zero follows IEEE 754 and produces infinity or NaN; it is
    /// never an error.
    fn div(&self, a: &StatArray<R>, b: &StatArray<R>) -> Result<StatArray<R>>;

    /// Element-wise power: `a[i] ^ b[i]`
    fn pow(&self, a: &StatArray<R>, b: &StatArray<R>) -> Result<StatArray<R>>;
}
