//! CPU implementation of sorting operations.

use crate::array::StatArray;
use crate::error::Result;
use crate::ops::{SortDirection, SortingOps};
use crate::runtime::cpu::{CpuClient, CpuRuntime, helpers::sort_in_place_impl};

/// SortingOps implementation for CPU runtime.
impl SortingOps<CpuRuntime> for CpuClient {
    fn sort_in_place(
        &self,
        a: &mut StatArray<CpuRuntime>,
        direction: SortDirection,
    ) -> Result<()> {
        sort_in_place_impl(self, a, direction)
    }
}
