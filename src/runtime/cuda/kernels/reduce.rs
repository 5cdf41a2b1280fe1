//! Reduction CUDA kernel launchers
//!
//! Reductions run in two stages. A grid-stride kernel leaves one `f64`
//! partial per block (at most `MAX_REDUCE_BLOCKS`); the partials are then
//! combined on the host with [`combine_partials`].

use cudarc::driver::PushKernelArg;
use cudarc::driver::safe::{CudaContext, CudaStream};
use std::sync::Arc;

use super::loader::{kernel_names, launch_error, load_kernel, reduce_launch_config};
use crate::dtype::DType;
use crate::error::Result;
use crate::runtime::helpers::ReduceKind;

fn reduce_kernel_base(kind: ReduceKind) -> &'static str {
    match kind {
        ReduceKind::Sum => "reduce_sum",
        ReduceKind::Min => "reduce_min",
        ReduceKind::Max => "reduce_max",
    }
}

/// Number of partials a reduction over `numel` elements produces
pub fn partial_count(numel: usize) -> usize {
    reduce_launch_config(numel).1 as usize
}

/// Launch a whole-array reduction kernel.
///
/// Min and max partials skip NaN; a block that saw only NaN writes NaN.
///
/// # Safety
///
/// - `input_ptr` must be valid device memory with at least `numel` elements
/// - `partials_ptr` must hold at least `partial_count(numel)` `f64` values
pub unsafe fn launch_reduce(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    kind: ReduceKind,
    dtype: DType,
    input_ptr: u64,
    partials_ptr: u64,
    numel: usize,
) -> Result<()> {
    let base = reduce_kernel_base(kind);
    let func = load_kernel(context, device_index, kernel_names::REDUCE_MODULE, base, dtype)?;
    let (cfg, _) = reduce_launch_config(numel);
    let n = numel as u32;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&input_ptr);
    builder.arg(&partials_ptr);
    builder.arg(&n);

    unsafe { builder.launch(cfg) }
        .map_err(|e| launch_error(kernel_names::REDUCE_MODULE, base, e))?;
    Ok(())
}

/// Launch the `sum((x - center)^2)` kernel.
///
/// # Safety
///
/// Same requirements as [`launch_reduce`].
pub unsafe fn launch_sum_squared_deviations(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    dtype: DType,
    input_ptr: u64,
    center: f64,
    partials_ptr: u64,
    numel: usize,
) -> Result<()> {
    let base = "sum_sq_dev";
    let func = load_kernel(context, device_index, kernel_names::REDUCE_MODULE, base, dtype)?;
    let (cfg, _) = reduce_launch_config(numel);
    let n = numel as u32;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&input_ptr);
    builder.arg(&center);
    builder.arg(&partials_ptr);
    builder.arg(&n);

    unsafe { builder.launch(cfg) }
        .map_err(|e| launch_error(kernel_names::REDUCE_MODULE, base, e))?;
    Ok(())
}

/// Combine per-block partials on the host
///
/// Sums add; min and max skip NaN partials and give NaN only when every
/// partial is NaN.
pub fn combine_partials(kind: ReduceKind, partials: &[f64]) -> f64 {
    match kind {
        ReduceKind::Sum => partials.iter().sum(),
        ReduceKind::Min => partials
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f64::min)
            .unwrap_or(f64::NAN),
        ReduceKind::Max => partials
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f64::max)
            .unwrap_or(f64::NAN),
    }
}
