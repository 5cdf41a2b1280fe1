//! Scalar operations trait.

use crate::array::StatArray;
use crate::error::Result;
use crate::ops::{BinaryOp, ScalarSide};
use crate::runtime::Runtime;

/// Scalar-array operations
///
/// The scalar is broadcast against every element, in either operand
/// position. The output has the same count and dtype as the array operand.
pub trait ScalarOps<R: Runtime> {
    /// Apply `op` between every element and `scalar`
    ///
    /// With [`ScalarSide::Right`] this computes `a[i] op scalar`; with
    /// [`ScalarSide::Left`] it computes `scalar op a[i]`.
    fn scalar_op(
        &self,
        op: BinaryOp,
        a: &StatArray<R>,
        scalar: f64,
        side: ScalarSide,
    ) -> Result<StatArray<R>>;

    /// Clamp every element into `[min_val, max_val]`
    ///
    /// NaN elements stay NaN.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `min_val > max_val`.
    fn clamp(&self, a: &StatArray<R>, min_val: f64, max_val: f64) -> Result<StatArray<R>>;

    /// Add scalar to array: a + scalar
    fn add_scalar(&self, a: &StatArray<R>, scalar: f64) -> Result<StatArray<R>> {
        self.scalar_op(BinaryOp::Add, a, scalar, ScalarSide::Right)
    }

    /// Subtract scalar from array: a - scalar
    fn sub_scalar(&self, a: &StatArray<R>, scalar: f64) -> Result<StatArray<R>> {
        self.scalar_op(BinaryOp::Sub, a, scalar, ScalarSide::Right)
    }

    /// Multiply array by scalar: a * scalar
    fn mul_scalar(&self, a: &StatArray<R>, scalar: f64) -> Result<StatArray<R>> {
        self.scalar_op(BinaryOp::Mul, a, scalar, ScalarSide::Right)
    }

    /// Divide array by scalar: a / scalar
    fn div_scalar(&self, a: &StatArray<R>, scalar: f64) -> Result<StatArray<R>> {
        self.scalar_op(BinaryOp::Div, a, scalar, ScalarSide::Right)
    }

    /// Raise array to scalar power: a ^ scalar
    fn pow_scalar(&self, a: &StatArray<R>, scalar: f64) -> Result<StatArray<R>> {
        self.scalar_op(BinaryOp::Pow, a, scalar, ScalarSide::Right)
    }

    /// Reverse subtract: scalar - a
    fn rsub_scalar(&self, a: &StatArray<R>, scalar: f64) -> Result<StatArray<R>> {
        self.scalar_op(BinaryOp::Sub, a, scalar, ScalarSide::Left)
    }

    /// Reverse divide: scalar / a
    fn rdiv_scalar(&self, a: &StatArray<R>, scalar: f64) -> Result<StatArray<R>> {
        self.scalar_op(BinaryOp::Div, a, scalar, ScalarSide::Left)
    }

    /// Reverse power: scalar ^ a
    fn rpow_scalar(&self, a: &StatArray<R>, scalar: f64) -> Result<StatArray<R>> {
        self.scalar_op(BinaryOp::Pow, a, scalar, ScalarSide::Left)
    }
}
