//! Generator helpers for CPU arrays

use super::super::kernels;
use super::super::{CpuClient, CpuRuntime};
use crate::array::{DeviceBuffer, StatArray};
use crate::dispatch_dtype;
use crate::dtype::DType;
use crate::error::Result;
use crate::ops::arange_len;
use crate::runtime::RuntimeClient;

/// Helper for `arange(start, end)`
pub fn arange_impl(
    client: &CpuClient,
    start: f64,
    end: f64,
    dtype: DType,
) -> Result<StatArray<CpuRuntime>> {
    let len = arange_len(start, end)?;
    let out = DeviceBuffer::<CpuRuntime>::for_output(len, dtype, client)?;
    if len > 0 {
        let out_ptr = out.ptr();
        let min_len = client.rayon_min_len();
        dispatch_dtype!(dtype, T => {
            client.install_parallelism(|| unsafe {
                kernels::arange_kernel::<T>(out_ptr as *mut T, start, len, min_len);
            });
        });
    }
    Ok(StatArray::from_buffer(out, client))
}

/// Helper for `full(count, value)`
pub fn fill_impl(
    client: &CpuClient,
    len: usize,
    value: f64,
    dtype: DType,
) -> Result<StatArray<CpuRuntime>> {
    let out = DeviceBuffer::<CpuRuntime>::for_output(len, dtype, client)?;
    if len > 0 {
        let out_ptr = out.ptr();
        let min_len = client.rayon_min_len();
        dispatch_dtype!(dtype, T => {
            client.install_parallelism(|| unsafe {
                kernels::fill_kernel::<T>(out_ptr as *mut T, value, len, min_len);
            });
        });
    }
    Ok(StatArray::from_buffer(out, client))
}

/// Helper for standard-normal sampling
pub fn randn_impl(client: &CpuClient, len: usize, dtype: DType) -> Result<StatArray<CpuRuntime>> {
    let out = DeviceBuffer::<CpuRuntime>::for_output(len, dtype, client)?;
    let seed = client.seeds().next_seed();
    if len > 0 {
        let out_ptr = out.ptr();
        let min_len = client.rayon_min_len();
        log::trace!("cpu randn: {len} x {dtype}, seed {seed:#x}");
        dispatch_dtype!(dtype, T => {
            client.install_parallelism(|| unsafe {
                kernels::randn_kernel::<T>(out_ptr as *mut T, len, seed, min_len);
            });
        });
    }
    Ok(StatArray::from_buffer(out, client))
}
