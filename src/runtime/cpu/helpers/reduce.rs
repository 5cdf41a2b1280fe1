//! Reduction helpers for CPU arrays

use super::super::kernels;
use super::super::{CpuClient, CpuRuntime};
use crate::array::StatArray;
use crate::dispatch_dtype;
use crate::error::Result;
use crate::runtime::helpers::ReduceKind;

/// Helper for whole-array reductions
pub fn reduce_impl(
    client: &CpuClient,
    kind: ReduceKind,
    a: &StatArray<CpuRuntime>,
) -> Result<f64> {
    let len = a.len();
    if len == 0 {
        return kind.on_empty();
    }

    let a_ptr = a.buffer().ptr();
    let min_len = client.rayon_min_len();

    let result = dispatch_dtype!(a.dtype(), T => {
        client.install_parallelism(|| unsafe {
            let ptr = a_ptr as *const T;
            match kind {
                ReduceKind::Sum => kernels::sum_kernel::<T>(ptr, len, min_len),
                ReduceKind::Min => kernels::min_kernel::<T>(ptr, len, min_len),
                ReduceKind::Max => kernels::max_kernel::<T>(ptr, len, min_len),
            }
        })
    });

    Ok(result)
}

/// Helper for `sum((a[i] - center)^2)`
pub fn sum_squared_deviations_impl(
    client: &CpuClient,
    a: &StatArray<CpuRuntime>,
    center: f64,
) -> Result<f64> {
    let len = a.len();
    if len == 0 {
        return Ok(0.0);
    }

    let a_ptr = a.buffer().ptr();
    let min_len = client.rayon_min_len();

    let result = dispatch_dtype!(a.dtype(), T => {
        client.install_parallelism(|| unsafe {
            kernels::sum_squared_deviations_kernel::<T>(a_ptr as *const T, len, center, min_len)
        })
    });

    Ok(result)
}
