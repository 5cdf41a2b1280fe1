//! Sorting helpers for CPU arrays

use super::super::kernels;
use super::super::{CpuClient, CpuRuntime};
use crate::array::StatArray;
use crate::dispatch_dtype;
use crate::error::Result;
use crate::ops::SortDirection;

/// Sort an array in place and record the direction on it
pub fn sort_in_place_impl(
    client: &CpuClient,
    a: &mut StatArray<CpuRuntime>,
    direction: SortDirection,
) -> Result<()> {
    let len = a.len();
    let descending = direction == SortDirection::Descending;

    if len > 1 {
        let ptr = a.buffer_mut().ptr();
        dispatch_dtype!(a.dtype(), T => {
            client.install_parallelism(|| unsafe {
                kernels::sort_kernel::<T>(ptr as *mut T, len, descending);
            });
        });
    }

    a.set_sort_order(direction.into());
    Ok(())
}
