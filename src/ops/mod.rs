//! Array operations
//!
//! This module defines operation traits and their per-backend implementations.
//!
//! # Design
//!
//! Operations are defined as traits that are implemented by the runtime's
//! client type. This gives operations access to the device, allocator, and
//! seed sequence they need to create output arrays.
//!
//! ```text
//! RuntimeClient<R>
//!   └── implements ArrayOps<R>
//!         ├── add, sub, mul, div, pow    (BinaryOps, vector-vector)
//!         ├── add_scalar, scalar_div ... (ScalarOps, scalar broadcast)
//!         ├── sum, mean, min, max        (ReduceOps)
//!         ├── sort, sort_in_place        (SortingOps)
//!         ├── median, quartiles, ...     (StatisticalOps)
//!         ├── randn                      (RandomOps)
//!         └── arange, full, zeros        (UtilityOps)
//! ```
//!
//! Backends implement the kernel-bearing traits (`BinaryOps`, `ScalarOps`,
//! `ReduceOps`, `SortingOps`, `RandomOps`, `UtilityOps`). Order statistics
//! are composed from those in `impl_generic`, so `StatisticalOps` is the same
//! code on every backend.

mod dispatch;
pub(crate) mod impl_generic;
pub mod traits;

pub(crate) mod cpu;

#[cfg(feature = "cuda")]
pub(crate) mod cuda;

pub use traits::*;

use crate::runtime::Runtime;

/// Element-wise arithmetic operator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b` (IEEE semantics: division by zero yields inf or NaN)
    Div,
    /// `a ^ b`
    Pow,
}

impl BinaryOp {
    /// Operation name used in errors, logs, and kernel names
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Pow => "pow",
        }
    }

    /// Apply the operator to two host values
    #[inline]
    pub fn apply<T: crate::dtype::Element>(self, a: T, b: T) -> T {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            Self::Pow => a.powf(b),
        }
    }
}

/// Position of the scalar operand in a scalar-vector operation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScalarSide {
    /// `a[i] op s`
    #[default]
    Right,
    /// `s op a[i]`
    Left,
}

/// Every operation a runtime client provides
///
/// `Runtime::Client` is bound by this trait, so generic code over `R: Runtime`
/// can call any operation on `R::Client`.
pub trait ArrayOps<R: Runtime>:
    BinaryOps<R>
    + ScalarOps<R>
    + ReduceOps<R>
    + SortingOps<R>
    + StatisticalOps<R>
    + RandomOps<R>
    + UtilityOps<R>
{
}

impl<R, C> ArrayOps<R> for C
where
    R: Runtime,
    C: BinaryOps<R>
        + ScalarOps<R>
        + ReduceOps<R>
        + SortingOps<R>
        + StatisticalOps<R>
        + RandomOps<R>
        + UtilityOps<R>,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_matches_operators() {
        assert_eq!(BinaryOp::Add.apply(2.0f64, 3.0), 5.0);
        assert_eq!(BinaryOp::Sub.apply(2.0f64, 3.0), -1.0);
        assert_eq!(BinaryOp::Mul.apply(2.0f32, 3.0), 6.0);
        assert_eq!(BinaryOp::Div.apply(3.0f64, 2.0), 1.5);
        assert_eq!(BinaryOp::Pow.apply(2.0f64, 10.0), 1024.0);
        assert!(BinaryOp::Div.apply(1.0f64, 0.0).is_infinite());
    }
}
