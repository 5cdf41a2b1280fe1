//! Shared helper functions for runtime backends
//!
//! This module contains helper functions that are used by both backends
//! (CPU, CUDA) to keep validation and error reporting identical.

use crate::array::StatArray;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::ops::BinaryOp;
use crate::runtime::Runtime;

/// Validate the operands of a vector-vector operation
///
/// Returns the shared dtype, or `ShapeMismatch` / `DTypeMismatch`.
#[inline]
pub fn validate_binary<R: Runtime>(
    op: BinaryOp,
    a: &StatArray<R>,
    b: &StatArray<R>,
) -> Result<DType> {
    if a.len() != b.len() {
        return Err(Error::shape_mismatch(op.name(), a.len(), b.len()));
    }
    if a.dtype() != b.dtype() {
        return Err(Error::DTypeMismatch {
            lhs: a.dtype(),
            rhs: b.dtype(),
        });
    }
    Ok(a.dtype())
}

/// Validate clamp bounds
#[inline]
pub fn validate_clamp_bounds(lo: f64, hi: f64) -> Result<()> {
    if lo > hi {
        return Err(Error::invalid_argument(
            "clamp",
            format!("lower bound {lo} exceeds upper bound {hi}"),
        ));
    }
    Ok(())
}

/// Whole-array reduction kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReduceKind {
    /// Pairwise sum
    Sum,
    /// Smallest element
    Min,
    /// Largest element
    Max,
}

impl ReduceKind {
    /// Operation name used in errors and kernel names
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Result of reducing an empty array
    pub(crate) fn on_empty(self) -> Result<f64> {
        match self {
            Self::Sum => Ok(0.0),
            _ => Err(Error::EmptyArray { op: self.name() }),
        }
    }
}
