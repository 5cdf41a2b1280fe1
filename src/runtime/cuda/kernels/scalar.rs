//! Scalar operation CUDA kernel launchers
//!
//! Provides launchers for scalar broadcast in either operand position and
//! for element-wise clamping. Scalars are converted to the array dtype on
//! the host before launch.

use cudarc::driver::PushKernelArg;
use cudarc::driver::safe::{CudaContext, CudaStream};
use std::sync::Arc;

use super::loader::{elementwise_launch_config, kernel_names, launch_error, load_kernel};
use crate::dtype::DType;
use crate::error::Result;
use crate::ops::{BinaryOp, ScalarSide};

/// Kernel base name for a scalar operation
///
/// Addition and multiplication commute, so only the non-commutative
/// operators have reversed (`r*`) kernels.
fn scalar_kernel_base(op: BinaryOp, side: ScalarSide) -> &'static str {
    match (op, side) {
        (BinaryOp::Add, _) => "add_scalar",
        (BinaryOp::Mul, _) => "mul_scalar",
        (BinaryOp::Sub, ScalarSide::Right) => "sub_scalar",
        (BinaryOp::Div, ScalarSide::Right) => "div_scalar",
        (BinaryOp::Pow, ScalarSide::Right) => "pow_scalar",
        (BinaryOp::Sub, ScalarSide::Left) => "rsub_scalar",
        (BinaryOp::Div, ScalarSide::Left) => "rdiv_scalar",
        (BinaryOp::Pow, ScalarSide::Left) => "rpow_scalar",
    }
}

/// Launch a scalar operation kernel.
///
/// `ScalarSide::Right` computes `out[i] = a[i] op scalar`, `ScalarSide::Left`
/// computes `out[i] = scalar op a[i]`.
///
/// # Safety
///
/// - `a_ptr` and `out_ptr` must be valid device memory with at least `numel`
///   elements of `dtype`
pub unsafe fn launch_scalar_op(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    op: BinaryOp,
    side: ScalarSide,
    dtype: DType,
    a_ptr: u64,
    scalar: f64,
    out_ptr: u64,
    numel: usize,
) -> Result<()> {
    let base = scalar_kernel_base(op, side);
    let func = load_kernel(context, device_index, kernel_names::SCALAR_MODULE, base, dtype)?;
    let n = numel as u32;
    let scalar_f32 = scalar as f32;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&a_ptr);
    match dtype {
        DType::F32 => builder.arg(&scalar_f32),
        DType::F64 => builder.arg(&scalar),
    };
    builder.arg(&out_ptr);
    builder.arg(&n);

    unsafe { builder.launch(elementwise_launch_config(numel)) }
        .map_err(|e| launch_error(kernel_names::SCALAR_MODULE, base, e))?;
    Ok(())
}

/// Launch the clamp kernel: `out[i] = min(max(a[i], lo), hi)`, NaN preserved.
///
/// # Safety
///
/// - `a_ptr` and `out_ptr` must be valid device memory with at least `numel`
///   elements of `dtype`
pub unsafe fn launch_clamp(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    dtype: DType,
    a_ptr: u64,
    lo: f64,
    hi: f64,
    out_ptr: u64,
    numel: usize,
) -> Result<()> {
    let func = load_kernel(context, device_index, kernel_names::SCALAR_MODULE, "clamp", dtype)?;
    let n = numel as u32;
    let (lo_f32, hi_f32) = (lo as f32, hi as f32);

    let mut builder = stream.launch_builder(&func);
    builder.arg(&a_ptr);
    match dtype {
        DType::F32 => builder.arg(&lo_f32).arg(&hi_f32),
        DType::F64 => builder.arg(&lo).arg(&hi),
    };
    builder.arg(&out_ptr);
    builder.arg(&n);

    unsafe { builder.launch(elementwise_launch_config(numel)) }
        .map_err(|e| launch_error(kernel_names::SCALAR_MODULE, "clamp", e))?;
    Ok(())
}
