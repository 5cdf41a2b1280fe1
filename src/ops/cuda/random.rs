//! CUDA implementation of random operations.

use crate::array::StatArray;
use crate::dtype::DType;
use crate::error::Result;
use crate::ops::RandomOps;
use crate::runtime::cuda::{CudaClient, CudaRuntime, helpers::randn_impl};

/// RandomOps implementation for CUDA runtime.
impl RandomOps<CudaRuntime> for CudaClient {
    fn randn(&self, count: usize, dtype: DType) -> Result<StatArray<CudaRuntime>> {
        randn_impl(self, count, dtype)
    }
}
