//! CUDA implementation of generator operations.

use crate::array::StatArray;
use crate::dtype::DType;
use crate::error::Result;
use crate::ops::UtilityOps;
use crate::runtime::cuda::{
    CudaClient, CudaRuntime,
    helpers::{arange_impl, fill_impl},
};

/// UtilityOps implementation for CUDA runtime.
impl UtilityOps<CudaRuntime> for CudaClient {
    fn arange(&self, start: f64, end: f64, dtype: DType) -> Result<StatArray<CudaRuntime>> {
        arange_impl(self, start, end, dtype)
    }

    fn full(&self, count: usize, value: f64, dtype: DType) -> Result<StatArray<CudaRuntime>> {
        fill_impl(self, count, value, dtype)
    }
}
