//! CPU kernel implementations
//!
//! This module provides low-level compute kernels for CPU operations.
//! Kernels are generic over `T: Element` and operate on raw pointers handed
//! out by `CpuRuntime`. With the `rayon` feature, work is split into chunks of
//! at least `min_len` elements; chunking never changes results.

#![allow(unsafe_op_in_unsafe_fn)] // Kernels are already marked unsafe, inner unsafe is redundant

pub mod binary;
pub mod distributions;
pub mod reduce;
pub mod scalar;
pub mod sort;
pub mod utility;

pub use binary::binary_op_kernel;
pub use distributions::randn_kernel;
pub use reduce::{max_kernel, min_kernel, sum_kernel, sum_squared_deviations_kernel};
pub use scalar::{clamp_kernel, scalar_op_kernel};
pub use sort::sort_kernel;
pub use utility::{arange_kernel, fill_kernel};

use crate::dtype::Element;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Write `f(input[i])` into `out[i]`
#[cfg_attr(not(feature = "rayon"), allow(unused_variables))]
pub(crate) fn map_into<T, F>(input: &[T], out: &mut [T], min_len: usize, f: F)
where
    T: Element,
    F: Fn(T) -> T + Send + Sync,
{
    #[cfg(feature = "rayon")]
    if out.len() > min_len {
        out.par_chunks_mut(min_len)
            .zip(input.par_chunks(min_len))
            .for_each(|(o, i)| {
                for (o, &x) in o.iter_mut().zip(i) {
                    *o = f(x);
                }
            });
        return;
    }

    for (o, &x) in out.iter_mut().zip(input) {
        *o = f(x);
    }
}

/// Write `f(i)` into `out[i]`
#[cfg_attr(not(feature = "rayon"), allow(unused_variables))]
pub(crate) fn fill_indexed<T, F>(out: &mut [T], min_len: usize, f: F)
where
    T: Element,
    F: Fn(usize) -> T + Send + Sync,
{
    #[cfg(feature = "rayon")]
    if out.len() > min_len {
        out.par_chunks_mut(min_len)
            .enumerate()
            .for_each(|(chunk, o)| {
                let base = chunk * min_len;
                for (j, o) in o.iter_mut().enumerate() {
                    *o = f(base + j);
                }
            });
        return;
    }

    for (i, o) in out.iter_mut().enumerate() {
        *o = f(i);
    }
}
