//! Binary operations kernels

use crate::dtype::Element;
use crate::ops::BinaryOp;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Execute a binary operation element-wise
///
/// # Safety
/// - `a`, `b`, and `out` must be valid, non-null pointers to `len` elements
/// - `out` must not overlap with `a` or `b`
#[inline]
#[cfg_attr(not(feature = "rayon"), allow(unused_variables))]
pub unsafe fn binary_op_kernel<T: Element>(
    op: BinaryOp,
    a: *const T,
    b: *const T,
    out: *mut T,
    len: usize,
    min_len: usize,
) {
    let a_slice = std::slice::from_raw_parts(a, len);
    let b_slice = std::slice::from_raw_parts(b, len);
    let out_slice = std::slice::from_raw_parts_mut(out, len);

    #[cfg(feature = "rayon")]
    if len > min_len {
        out_slice
            .par_chunks_mut(min_len)
            .zip(a_slice.par_chunks(min_len))
            .zip(b_slice.par_chunks(min_len))
            .for_each(|((o, a), b)| binary_serial(op, a, b, o));
        return;
    }

    binary_serial(op, a_slice, b_slice, out_slice);
}

#[inline]
fn binary_serial<T: Element>(op: BinaryOp, a: &[T], b: &[T], out: &mut [T]) {
    match op {
        BinaryOp::Add => {
            for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
                *o = x + y;
            }
        }
        BinaryOp::Sub => {
            for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
                *o = x - y;
            }
        }
        BinaryOp::Mul => {
            for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
                *o = x * y;
            }
        }
        BinaryOp::Div => {
            for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
                *o = x / y;
            }
        }
        BinaryOp::Pow => {
            for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
                *o = x.powf(y);
            }
        }
    }
}
