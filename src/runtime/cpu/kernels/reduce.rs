//! Reduction kernels
//!
//! Sums use a pairwise tree: slices above `PAIRWISE_LEAF` elements are split
//! in half and the halves summed recursively. Halves larger than `min_len`
//! are summed on separate rayon tasks. All accumulation is in `f64`.

use crate::dtype::Element;

/// Slices at or below this length are summed sequentially
const PAIRWISE_LEAF: usize = 128;

#[inline]
fn leaf_sum<T: Element, F: Fn(T) -> f64>(x: &[T], f: &F) -> f64 {
    x.iter().fold(0.0, |acc, &v| acc + f(v))
}

#[cfg_attr(not(feature = "rayon"), allow(unused_variables))]
fn pairwise_sum<T, F>(x: &[T], min_len: usize, f: &F) -> f64
where
    T: Element,
    F: Fn(T) -> f64 + Sync,
{
    if x.len() <= PAIRWISE_LEAF {
        return leaf_sum(x, f);
    }
    let (left, right) = x.split_at(x.len() / 2);

    #[cfg(feature = "rayon")]
    if x.len() > min_len {
        let (l, r) = rayon::join(
            || pairwise_sum(left, min_len, f),
            || pairwise_sum(right, min_len, f),
        );
        return l + r;
    }

    pairwise_sum(left, min_len, f) + pairwise_sum(right, min_len, f)
}

/// Pairwise sum of `len` elements
///
/// # Safety
/// - `a` must be a valid pointer to `len` elements (or `len == 0`)
pub unsafe fn sum_kernel<T: Element>(a: *const T, len: usize, min_len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    let x = std::slice::from_raw_parts(a, len);
    pairwise_sum(x, min_len, &|v: T| v.to_f64())
}

/// Pairwise sum of `(a[i] - center)^2`
///
/// # Safety
/// - `a` must be a valid pointer to `len` elements (or `len == 0`)
pub unsafe fn sum_squared_deviations_kernel<T: Element>(
    a: *const T,
    len: usize,
    center: f64,
    min_len: usize,
) -> f64 {
    if len == 0 {
        return 0.0;
    }
    let x = std::slice::from_raw_parts(a, len);
    pairwise_sum(x, min_len, &|v: T| {
        let d = v.to_f64() - center;
        d * d
    })
}

/// Combine two partial extremes, letting numbers win over NaN
#[inline]
fn pick(acc: f64, v: f64, want_less: bool) -> f64 {
    if v.is_nan() {
        acc
    } else if acc.is_nan() || (want_less && v < acc) || (!want_less && v > acc) {
        v
    } else {
        acc
    }
}

#[cfg_attr(not(feature = "rayon"), allow(unused_variables))]
fn extreme<T: Element>(x: &[T], min_len: usize, want_less: bool) -> f64 {
    #[cfg(feature = "rayon")]
    if x.len() > min_len {
        use rayon::prelude::*;
        return x
            .par_chunks(min_len)
            .map(|c| extreme(c, usize::MAX, want_less))
            .reduce(|| f64::NAN, |a, b| pick(a, b, want_less));
    }
    x.iter()
        .fold(f64::NAN, |acc, &v| pick(acc, v.to_f64(), want_less))
}

/// Smallest non-NaN element; NaN if there is none
///
/// # Safety
/// - `a` must be a valid pointer to `len` elements (or `len == 0`)
pub unsafe fn min_kernel<T: Element>(a: *const T, len: usize, min_len: usize) -> f64 {
    if len == 0 {
        return f64::NAN;
    }
    extreme(std::slice::from_raw_parts(a, len), min_len, true)
}

/// Largest non-NaN element; NaN if there is none
///
/// # Safety
/// - `a` must be a valid pointer to `len` elements (or `len == 0`)
pub unsafe fn max_kernel<T: Element>(a: *const T, len: usize, min_len: usize) -> f64 {
    if len == 0 {
        return f64::NAN;
    }
    extreme(std::slice::from_raw_parts(a, len), min_len, false)
}
