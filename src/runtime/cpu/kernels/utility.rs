//! Generator kernels

use super::fill_indexed;
use crate::dtype::Element;

/// `out[i] = start + i`
///
/// # Safety
/// - `out` must be a valid, non-null pointer to `len` elements
#[inline]
pub unsafe fn arange_kernel<T: Element>(out: *mut T, start: f64, len: usize, min_len: usize) {
    let out_slice = std::slice::from_raw_parts_mut(out, len);
    fill_indexed(out_slice, min_len, |i| T::from_f64(start + i as f64));
}

/// `out[i] = value`
///
/// # Safety
/// - `out` must be a valid, non-null pointer to `len` elements
#[inline]
pub unsafe fn fill_kernel<T: Element>(out: *mut T, value: f64, len: usize, min_len: usize) {
    let out_slice = std::slice::from_raw_parts_mut(out, len);
    let v = T::from_f64(value);
    fill_indexed(out_slice, min_len, |_| v);
}
