//! CPU implementation of random operations.

use crate::array::StatArray;
use crate::dtype::DType;
use crate::error::Result;
use crate::ops::RandomOps;
use crate::runtime::cpu::{CpuClient, CpuRuntime, helpers::randn_impl};

/// RandomOps implementation for CPU runtime.
impl RandomOps<CpuRuntime> for CpuClient {
    fn randn(&self, count: usize, dtype: DType) -> Result<StatArray<CpuRuntime>> {
        randn_impl(self, count, dtype)
    }
}
