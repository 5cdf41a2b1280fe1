//! CUDA-specific helper functions for kernel launching
//!
//! Each helper validates its operands, allocates the output through the
//! client's allocator, and launches on the client's stream. Results reach the
//! host only through the synchronizing copies in `CudaRuntime`.

use super::kernels::{
    combine_partials, launch_arange, launch_binary_op, launch_bitonic_sort, launch_clamp,
    launch_fill, launch_randn, launch_reduce, launch_reverse, launch_scalar_op,
    launch_sum_squared_deviations, partial_count,
};
use super::{CudaClient, CudaRuntime};
use crate::array::{DeviceBuffer, StatArray};
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::ops::{BinaryOp, ScalarSide, SortDirection, arange_len};
use crate::runtime::helpers::{ReduceKind, validate_binary, validate_clamp_bounds};
use crate::runtime::{Runtime, RuntimeClient};

/// Kernels index with 32-bit counters
fn check_kernel_len(len: usize) -> Result<()> {
    if len > u32::MAX as usize {
        return Err(Error::Backend(format!(
            "cuda: {len} elements exceed the kernel index range"
        )));
    }
    Ok(())
}

fn output(client: &CudaClient, len: usize, dtype: DType) -> Result<DeviceBuffer<CudaRuntime>> {
    check_kernel_len(len)?;
    DeviceBuffer::<CudaRuntime>::for_output(len, dtype, client)
}

/// Helper for vector-vector operations
pub(crate) fn binary_op_impl(
    client: &CudaClient,
    op: BinaryOp,
    a: &StatArray<CudaRuntime>,
    b: &StatArray<CudaRuntime>,
) -> Result<StatArray<CudaRuntime>> {
    let dtype = validate_binary(op, a, b)?;
    let len = a.len();
    let out = output(client, len, dtype)?;
    if len > 0 {
        unsafe {
            launch_binary_op(
                &client.context,
                &client.stream,
                client.device.index,
                op,
                dtype,
                a.buffer().ptr(),
                b.buffer().ptr(),
                out.ptr(),
                len,
            )?;
        }
    }
    Ok(StatArray::from_buffer(out, client))
}

/// Helper for scalar broadcast operations
pub(crate) fn scalar_op_impl(
    client: &CudaClient,
    op: BinaryOp,
    a: &StatArray<CudaRuntime>,
    scalar: f64,
    side: ScalarSide,
) -> Result<StatArray<CudaRuntime>> {
    let dtype = a.dtype();
    let len = a.len();
    let out = output(client, len, dtype)?;
    if len > 0 {
        unsafe {
            launch_scalar_op(
                &client.context,
                &client.stream,
                client.device.index,
                op,
                side,
                dtype,
                a.buffer().ptr(),
                scalar,
                out.ptr(),
                len,
            )?;
        }
    }
    Ok(StatArray::from_buffer(out, client))
}

/// Helper for element-wise clamp
pub(crate) fn clamp_impl(
    client: &CudaClient,
    a: &StatArray<CudaRuntime>,
    lo: f64,
    hi: f64,
) -> Result<StatArray<CudaRuntime>> {
    validate_clamp_bounds(lo, hi)?;
    let dtype = a.dtype();
    let len = a.len();
    let out = output(client, len, dtype)?;
    if len > 0 {
        unsafe {
            launch_clamp(
                &client.context,
                &client.stream,
                client.device.index,
                dtype,
                a.buffer().ptr(),
                lo,
                hi,
                out.ptr(),
                len,
            )?;
        }
    }
    Ok(StatArray::from_buffer(out, client))
}

/// Run a partial-producing reduction and read the partials back
fn read_partials(
    client: &CudaClient,
    len: usize,
    launch: impl FnOnce(u64) -> Result<()>,
) -> Result<Vec<f64>> {
    let partials = output(client, partial_count(len), DType::F64)?;
    launch(partials.ptr())?;
    partials.to_vec::<f64>()
}

/// Helper for whole-array reductions
pub(crate) fn reduce_impl(
    client: &CudaClient,
    kind: ReduceKind,
    a: &StatArray<CudaRuntime>,
) -> Result<f64> {
    let len = a.len();
    if len == 0 {
        return kind.on_empty();
    }
    check_kernel_len(len)?;

    let partials = read_partials(client, len, |partials_ptr| unsafe {
        launch_reduce(
            &client.context,
            &client.stream,
            client.device.index,
            kind,
            a.dtype(),
            a.buffer().ptr(),
            partials_ptr,
            len,
        )
    })?;
    Ok(combine_partials(kind, &partials))
}

/// Helper for `sum((a[i] - center)^2)`
pub(crate) fn sum_squared_deviations_impl(
    client: &CudaClient,
    a: &StatArray<CudaRuntime>,
    center: f64,
) -> Result<f64> {
    let len = a.len();
    if len == 0 {
        return Ok(0.0);
    }
    check_kernel_len(len)?;

    let partials = read_partials(client, len, |partials_ptr| unsafe {
        launch_sum_squared_deviations(
            &client.context,
            &client.stream,
            client.device.index,
            a.dtype(),
            a.buffer().ptr(),
            center,
            partials_ptr,
            len,
        )
    })?;
    Ok(combine_partials(ReduceKind::Sum, &partials))
}

/// Sort an array in place and record the direction on it
///
/// Lengths that are not a power of two are sorted in a NaN-padded scratch
/// buffer that counts against the client's memory limit.
pub(crate) fn sort_in_place_impl(
    client: &CudaClient,
    a: &mut StatArray<CudaRuntime>,
    direction: SortDirection,
) -> Result<()> {
    let len = a.len();
    let dtype = a.dtype();

    if len > 1 {
        let padded_len = len
            .checked_next_power_of_two()
            .ok_or(Error::OutOfMemory { size: usize::MAX })?;
        check_kernel_len(padded_len)?;
        let data_ptr = a.buffer_mut().ptr();
        let bytes = len * dtype.size_in_bytes();

        let scratch = if padded_len == len {
            None
        } else {
            let scratch = output(client, padded_len, dtype)?;
            unsafe {
                launch_fill(
                    &client.context,
                    &client.stream,
                    client.device.index,
                    dtype,
                    scratch.ptr(),
                    f64::NAN,
                    padded_len,
                )?;
            }
            CudaRuntime::copy_within_device(data_ptr, scratch.ptr(), bytes, client.device())?;
            Some(scratch)
        };
        let work_ptr = scratch.as_ref().map_or(data_ptr, |s| s.ptr());

        unsafe {
            launch_bitonic_sort(
                &client.context,
                &client.stream,
                client.device.index,
                dtype,
                work_ptr,
                padded_len,
            )?;
            if direction == SortDirection::Descending {
                launch_reverse(
                    &client.context,
                    &client.stream,
                    client.device.index,
                    dtype,
                    work_ptr,
                    len,
                )?;
            }
        }

        if let Some(scratch) = scratch {
            CudaRuntime::copy_within_device(scratch.ptr(), data_ptr, bytes, client.device())?;
        }
    }

    a.set_sort_order(direction.into());
    Ok(())
}

/// Helper for `arange(start, end)`
pub(crate) fn arange_impl(
    client: &CudaClient,
    start: f64,
    end: f64,
    dtype: DType,
) -> Result<StatArray<CudaRuntime>> {
    let len = arange_len(start, end)?;
    let out = output(client, len, dtype)?;
    if len > 0 {
        unsafe {
            launch_arange(
                &client.context,
                &client.stream,
                client.device.index,
                dtype,
                out.ptr(),
                start,
                len,
            )?;
        }
    }
    Ok(StatArray::from_buffer(out, client))
}

/// Helper for `full(count, value)`
pub(crate) fn fill_impl(
    client: &CudaClient,
    len: usize,
    value: f64,
    dtype: DType,
) -> Result<StatArray<CudaRuntime>> {
    let out = output(client, len, dtype)?;
    if len > 0 {
        unsafe {
            launch_fill(
                &client.context,
                &client.stream,
                client.device.index,
                dtype,
                out.ptr(),
                value,
                len,
            )?;
        }
    }
    Ok(StatArray::from_buffer(out, client))
}

/// Helper for standard-normal sampling
pub(crate) fn randn_impl(
    client: &CudaClient,
    len: usize,
    dtype: DType,
) -> Result<StatArray<CudaRuntime>> {
    let out = output(client, len, dtype)?;
    let seed = client.seeds().next_seed();
    if len > 0 {
        log::trace!("cuda randn: {len} x {dtype}, seed {seed:#x}");
        unsafe {
            launch_randn(
                &client.context,
                &client.stream,
                client.device.index,
                dtype,
                out.ptr(),
                len,
                seed,
            )?;
        }
    }
    Ok(StatArray::from_buffer(out, client))
}
