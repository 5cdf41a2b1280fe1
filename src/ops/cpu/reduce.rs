//! CPU implementation of reduction operations.

use crate::array::StatArray;
use crate::error::Result;
use crate::ops::ReduceOps;
use crate::runtime::cpu::{
    CpuClient, CpuRuntime,
    helpers::{ReduceKind, reduce_impl, sum_squared_deviations_impl},
};

/// ReduceOps implementation for CPU runtime.
impl ReduceOps<CpuRuntime> for CpuClient {
    fn sum(&self, a: &StatArray<CpuRuntime>) -> Result<f64> {
        reduce_impl(self, ReduceKind::Sum, a)
    }

    fn min(&self, a: &StatArray<CpuRuntime>) -> Result<f64> {
        reduce_impl(self, ReduceKind::Min, a)
    }

    fn max(&self, a: &StatArray<CpuRuntime>) -> Result<f64> {
        reduce_impl(self, ReduceKind::Max, a)
    }

    fn sum_squared_deviations(&self, a: &StatArray<CpuRuntime>, center: f64) -> Result<f64> {
        sum_squared_deviations_impl(self, a, center)
    }
}
