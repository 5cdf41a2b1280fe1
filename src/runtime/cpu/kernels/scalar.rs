//! Scalar broadcast kernels

use super::map_into;
use crate::dtype::Element;
use crate::ops::{BinaryOp, ScalarSide};

/// Combine every element with a broadcast scalar
///
/// `ScalarSide::Right` computes `a[i] op scalar`, `ScalarSide::Left`
/// computes `scalar op a[i]`.
///
/// # Safety
/// - `a` and `out` must be valid, non-null pointers to `len` elements
/// - `out` must not overlap with `a`
#[inline]
pub unsafe fn scalar_op_kernel<T: Element>(
    op: BinaryOp,
    a: *const T,
    scalar: f64,
    side: ScalarSide,
    out: *mut T,
    len: usize,
    min_len: usize,
) {
    let a_slice = std::slice::from_raw_parts(a, len);
    let out_slice = std::slice::from_raw_parts_mut(out, len);
    let s = T::from_f64(scalar);

    match side {
        ScalarSide::Right => map_into(a_slice, out_slice, min_len, |x| op.apply(x, s)),
        ScalarSide::Left => map_into(a_slice, out_slice, min_len, |x| op.apply(s, x)),
    }
}

/// Clamp every element into `[lo, hi]`; NaN elements pass through
///
/// # Safety
/// - `a` and `out` must be valid, non-null pointers to `len` elements
/// - `out` must not overlap with `a`
#[inline]
pub unsafe fn clamp_kernel<T: Element>(
    a: *const T,
    lo: f64,
    hi: f64,
    out: *mut T,
    len: usize,
    min_len: usize,
) {
    let a_slice = std::slice::from_raw_parts(a, len);
    let out_slice = std::slice::from_raw_parts_mut(out, len);
    let lo = T::from_f64(lo);
    let hi = T::from_f64(hi);

    map_into(a_slice, out_slice, min_len, |x| {
        if x < lo {
            lo
        } else if x > hi {
            hi
        } else {
            x
        }
    });
}
