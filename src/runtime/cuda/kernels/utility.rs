//! Utility CUDA kernel launchers (ranges and fills)

use cudarc::driver::PushKernelArg;
use cudarc::driver::safe::{CudaContext, CudaStream};
use std::sync::Arc;

use super::loader::{elementwise_launch_config, kernel_names, launch_error, load_kernel};
use crate::dtype::DType;
use crate::error::Result;

/// Launch a kernel of shape `(out, value, n)`
unsafe fn launch_generator(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    op: &'static str,
    dtype: DType,
    out_ptr: u64,
    value: f64,
    numel: usize,
) -> Result<()> {
    let func = load_kernel(context, device_index, kernel_names::UTILITY_MODULE, op, dtype)?;
    let n = numel as u32;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&out_ptr);
    builder.arg(&value);
    builder.arg(&n);

    unsafe { builder.launch(elementwise_launch_config(numel)) }
        .map_err(|e| launch_error(kernel_names::UTILITY_MODULE, op, e))?;
    Ok(())
}

/// Fill `out[i] = value` (converted to `dtype` on the device).
///
/// # Safety
///
/// - `out_ptr` must be valid device memory with at least `numel` elements of `dtype`
pub unsafe fn launch_fill(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    dtype: DType,
    out_ptr: u64,
    value: f64,
    numel: usize,
) -> Result<()> {
    unsafe {
        launch_generator(context, stream, device_index, "fill", dtype, out_ptr, value, numel)
    }
}

/// Fill `out[i] = start + i`, computed in `f64` and converted to `dtype`.
///
/// # Safety
///
/// - `out_ptr` must be valid device memory with at least `numel` elements of `dtype`
pub unsafe fn launch_arange(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    dtype: DType,
    out_ptr: u64,
    start: f64,
    numel: usize,
) -> Result<()> {
    unsafe {
        launch_generator(context, stream, device_index, "arange", dtype, out_ptr, start, numel)
    }
}
