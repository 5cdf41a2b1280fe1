//! Sorting kernels

use crate::dtype::Element;
use std::cmp::Ordering;

/// Total order with NaN after every number
#[inline]
pub fn nan_last_cmp<T: Element>(a: &T, b: &T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Sort `len` elements in place
///
/// Ascending order puts NaN last; descending order is its exact reverse.
/// Not stable.
///
/// # Safety
/// - `data` must be a valid, non-null pointer to `len` elements
#[inline]
pub unsafe fn sort_kernel<T: Element>(data: *mut T, len: usize, descending: bool) {
    let slice = std::slice::from_raw_parts_mut(data, len);

    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        slice.par_sort_unstable_by(nan_last_cmp);
    }
    #[cfg(not(feature = "rayon"))]
    slice.sort_unstable_by(nan_last_cmp);

    if descending {
        slice.reverse();
    }
}
