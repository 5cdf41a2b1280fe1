//! CUDA implementation of reduction operations.

use crate::array::StatArray;
use crate::error::Result;
use crate::ops::ReduceOps;
use crate::runtime::helpers::ReduceKind;
use crate::runtime::cuda::{
    CudaClient, CudaRuntime,
    helpers::{reduce_impl, sum_squared_deviations_impl},
};

/// ReduceOps implementation for CUDA runtime.
impl ReduceOps<CudaRuntime> for CudaClient {
    fn sum(&self, a: &StatArray<CudaRuntime>) -> Result<f64> {
        reduce_impl(self, ReduceKind::Sum, a)
    }

    fn min(&self, a: &StatArray<CudaRuntime>) -> Result<f64> {
        reduce_impl(self, ReduceKind::Min, a)
    }

    fn max(&self, a: &StatArray<CudaRuntime>) -> Result<f64> {
        reduce_impl(self, ReduceKind::Max, a)
    }

    fn sum_squared_deviations(&self, a: &StatArray<CudaRuntime>, center: f64) -> Result<f64> {
        sum_squared_deviations_impl(self, a, center)
    }
}
