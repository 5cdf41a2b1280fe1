//! CPU implementation of generator operations.

use crate::array::StatArray;
use crate::dtype::DType;
use crate::error::Result;
use crate::ops::UtilityOps;
use crate::runtime::cpu::{
    CpuClient, CpuRuntime,
    helpers::{arange_impl, fill_impl},
};

/// UtilityOps implementation for CPU runtime.
impl UtilityOps<CpuRuntime> for CpuClient {
    fn arange(&self, start: f64, end: f64, dtype: DType) -> Result<StatArray<CpuRuntime>> {
        arange_impl(self, start, end, dtype)
    }

    fn full(&self, count: usize, value: f64, dtype: DType) -> Result<StatArray<CpuRuntime>> {
        fill_impl(self, count, value, dtype)
    }
}
