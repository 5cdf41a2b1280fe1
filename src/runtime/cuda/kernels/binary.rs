//! Binary operation CUDA kernel launchers
//!
//! Element-wise `out[i] = op(a[i], b[i])` over two arrays of equal length.

use cudarc::driver::PushKernelArg;
use cudarc::driver::safe::{CudaContext, CudaStream};
use std::sync::Arc;

use super::loader::{elementwise_launch_config, kernel_names, launch_error, load_kernel};
use crate::dtype::DType;
use crate::error::Result;
use crate::ops::BinaryOp;

/// Launch a binary operation kernel (`add`, `sub`, `mul`, `div`, `pow`).
///
/// # Safety
///
/// - All pointers must be valid device memory with at least `numel` elements
///   of `dtype`
/// - `out_ptr` must not overlap `a_ptr` or `b_ptr`
pub unsafe fn launch_binary_op(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    op: BinaryOp,
    dtype: DType,
    a_ptr: u64,
    b_ptr: u64,
    out_ptr: u64,
    numel: usize,
) -> Result<()> {
    let func = load_kernel(
        context,
        device_index,
        kernel_names::BINARY_MODULE,
        op.name(),
        dtype,
    )?;
    let n = numel as u32;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&a_ptr);
    builder.arg(&b_ptr);
    builder.arg(&out_ptr);
    builder.arg(&n);

    unsafe { builder.launch(elementwise_launch_config(numel)) }
        .map_err(|e| launch_error(kernel_names::BINARY_MODULE, op.name(), e))?;
    Ok(())
}
