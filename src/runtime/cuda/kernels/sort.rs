//! Sort CUDA kernel launchers
//!
//! Sorting uses a global-memory bitonic network over a power-of-two buffer.
//! Padding slots hold NaN, which the comparator orders after every number,
//! so they collect at the tail and the first `len` slots hold the result.

use cudarc::driver::PushKernelArg;
use cudarc::driver::safe::{CudaContext, CudaStream};
use std::sync::Arc;

use super::loader::{elementwise_launch_config, kernel_names, launch_error, load_kernel};
use crate::dtype::DType;
use crate::error::Result;

/// Sort `n` elements ascending with NaN last; `n` must be a power of two.
///
/// # Safety
///
/// - `data_ptr` must be valid device memory with at least `n` elements of `dtype`
pub unsafe fn launch_bitonic_sort(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    dtype: DType,
    data_ptr: u64,
    n: usize,
) -> Result<()> {
    debug_assert!(n.is_power_of_two());
    let func = load_kernel(
        context,
        device_index,
        kernel_names::SORT_MODULE,
        "bitonic_step",
        dtype,
    )?;
    let cfg = elementwise_launch_config(n);
    let n_u32 = n as u32;

    for (k, j) in bitonic_schedule(n) {
        let mut builder = stream.launch_builder(&func);
        builder.arg(&data_ptr);
        builder.arg(&n_u32);
        builder.arg(&j);
        builder.arg(&k);
        unsafe { builder.launch(cfg) }
            .map_err(|e| launch_error(kernel_names::SORT_MODULE, "bitonic_step", e))?;
    }
    Ok(())
}

/// `(k, j)` stage parameters of the bitonic network over `n` elements, in
/// launch order
///
/// Counters run in `u64` so the last stage of a `2^31`-element sort ends the
/// loop instead of wrapping. `n` must be a power of two no larger than `2^31`.
pub(crate) fn bitonic_schedule(n: usize) -> impl Iterator<Item = (u32, u32)> {
    let n = n as u64;
    std::iter::successors(Some(2u64), |k| Some(k << 1))
        .take_while(move |&k| k <= n)
        .flat_map(|k| {
            std::iter::successors(Some(k >> 1), |j| Some(j >> 1))
                .take_while(|&j| j > 0)
                .map(move |j| (k as u32, j as u32))
        })
}

/// Reverse `n` elements in place.
///
/// # Safety
///
/// - `data_ptr` must be valid device memory with at least `n` elements of `dtype`
pub unsafe fn launch_reverse(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    dtype: DType,
    data_ptr: u64,
    n: usize,
) -> Result<()> {
    if n < 2 {
        return Ok(());
    }
    let func = load_kernel(context, device_index, kernel_names::SORT_MODULE, "reverse", dtype)?;
    let n_u32 = n as u32;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&data_ptr);
    builder.arg(&n_u32);

    unsafe { builder.launch(elementwise_launch_config(n / 2)) }
        .map_err(|e| launch_error(kernel_names::SORT_MODULE, "reverse", e))?;
    Ok(())
}
