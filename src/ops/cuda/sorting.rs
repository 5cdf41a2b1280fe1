//! CUDA implementation of sorting operations.

use crate::array::StatArray;
use crate::error::Result;
use crate::ops::{SortDirection, SortingOps};
use crate::runtime::cuda::{CudaClient, CudaRuntime, helpers::sort_in_place_impl};

/// SortingOps implementation for CUDA runtime.
impl SortingOps<CudaRuntime> for CudaClient {
    fn sort_in_place(
        &self,
        a: &mut StatArray<CudaRuntime>,
        direction: SortDirection,
    ) -> Result<()> {
        sort_in_place_impl(self, a, direction)
    }
}
