//! Element-wise operation helpers for CPU arrays

use super::super::kernels;
use super::super::{CpuClient, CpuRuntime};
use crate::array::{DeviceBuffer, StatArray};
use crate::dispatch_dtype;
use crate::error::Result;
use crate::ops::{BinaryOp, ScalarSide};
use crate::runtime::helpers::{validate_binary, validate_clamp_bounds};

/// Helper for vector-vector operations (add, sub, mul, div, pow)
pub fn binary_op_impl(
    client: &CpuClient,
    op: BinaryOp,
    a: &StatArray<CpuRuntime>,
    b: &StatArray<CpuRuntime>,
) -> Result<StatArray<CpuRuntime>> {
    let dtype = validate_binary(op, a, b)?;
    let len = a.len();
    let out = DeviceBuffer::<CpuRuntime>::for_output(len, dtype, client)?;
    if len == 0 {
        return Ok(StatArray::from_buffer(out, client));
    }

    let a_ptr = a.buffer().ptr();
    let b_ptr = b.buffer().ptr();
    let out_ptr = out.ptr();
    let min_len = client.rayon_min_len();

    dispatch_dtype!(dtype, T => {
        client.install_parallelism(|| unsafe {
            kernels::binary_op_kernel::<T>(
                op,
                a_ptr as *const T,
                b_ptr as *const T,
                out_ptr as *mut T,
                len,
                min_len,
            );
        });
    });

    Ok(StatArray::from_buffer(out, client))
}

/// Helper for scalar broadcast operations
pub fn scalar_op_impl(
    client: &CpuClient,
    op: BinaryOp,
    a: &StatArray<CpuRuntime>,
    scalar: f64,
    side: ScalarSide,
) -> Result<StatArray<CpuRuntime>> {
    let dtype = a.dtype();
    let len = a.len();
    let out = DeviceBuffer::<CpuRuntime>::for_output(len, dtype, client)?;
    if len == 0 {
        return Ok(StatArray::from_buffer(out, client));
    }

    let a_ptr = a.buffer().ptr();
    let out_ptr = out.ptr();
    let min_len = client.rayon_min_len();

    dispatch_dtype!(dtype, T => {
        client.install_parallelism(|| unsafe {
            kernels::scalar_op_kernel::<T>(
                op,
                a_ptr as *const T,
                scalar,
                side,
                out_ptr as *mut T,
                len,
                min_len,
            );
        });
    });

    Ok(StatArray::from_buffer(out, client))
}

/// Helper for element-wise clamp
pub fn clamp_impl(
    client: &CpuClient,
    a: &StatArray<CpuRuntime>,
    lo: f64,
    hi: f64,
) -> Result<StatArray<CpuRuntime>> {
    validate_clamp_bounds(lo, hi)?;
    let dtype = a.dtype();
    let len = a.len();
    let out = DeviceBuffer::<CpuRuntime>::for_output(len, dtype, client)?;
    if len == 0 {
        return Ok(StatArray::from_buffer(out, client));
    }

    let a_ptr = a.buffer().ptr();
    let out_ptr = out.ptr();
    let min_len = client.rayon_min_len();

    dispatch_dtype!(dtype, T => {
        client.install_parallelism(|| unsafe {
            kernels::clamp_kernel::<T>(a_ptr as *const T, lo, hi, out_ptr as *mut T, len, min_len);
        });
    });

    Ok(StatArray::from_buffer(out, client))
}
