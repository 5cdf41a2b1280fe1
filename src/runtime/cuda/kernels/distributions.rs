//! Random sampling CUDA kernel launchers

use cudarc::driver::PushKernelArg;
use cudarc::driver::safe::{CudaContext, CudaStream};
use std::sync::Arc;

use super::loader::{elementwise_launch_config, kernel_names, launch_error, load_kernel};
use crate::dtype::DType;
use crate::error::Result;

/// Fill `out` with standard-normal samples.
///
/// Element `i` is a pure function of `(seed, i)`: two uniforms come from
/// SplitMix64 over a per-element counter and go through Box-Muller.
///
/// # Safety
///
/// - `out_ptr` must be valid device memory with at least `numel` elements of `dtype`
pub unsafe fn launch_randn(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    dtype: DType,
    out_ptr: u64,
    numel: usize,
    seed: u64,
) -> Result<()> {
    let func = load_kernel(
        context,
        device_index,
        kernel_names::DISTRIBUTIONS_MODULE,
        "randn",
        dtype,
    )?;
    let n = numel as u32;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&out_ptr);
    builder.arg(&n);
    builder.arg(&seed);

    unsafe { builder.launch(elementwise_launch_config(numel)) }
        .map_err(|e| launch_error(kernel_names::DISTRIBUTIONS_MODULE, "randn", e))?;
    Ok(())
}
