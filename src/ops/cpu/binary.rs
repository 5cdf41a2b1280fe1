//! CPU implementation of binary operations.

use crate::array::StatArray;
use crate::error::Result;
use crate::ops::{BinaryOp, BinaryOps};
use crate::runtime::cpu::{CpuClient, CpuRuntime, helpers::binary_op_impl};

/// BinaryOps implementation for CPU runtime.
impl BinaryOps<CpuRuntime> for CpuClient {
    fn add(
        &self,
        a: &StatArray<CpuRuntime>,
        b: &StatArray<CpuRuntime>,
    ) -> Result<StatArray<CpuRuntime>> {
        binary_op_impl(self, BinaryOp::Add, a, b)
    }

    fn sub(
        &self,
        a: &StatArray<CpuRuntime>,
        b: &StatArray<CpuRuntime>,
    ) -> Result<StatArray<CpuRuntime>> {
        binary_op_impl(self, BinaryOp::Sub, a, b)
    }

    fn mul(
        &self,
        a: &StatArray<CpuRuntime>,
        b: &StatArray<CpuRuntime>,
    ) -> Result<StatArray<CpuRuntime>> {
        binary_op_impl(self, BinaryOp::Mul, a, b)
    }

    fn div(
        &self,
        a: &StatArray<CpuRuntime>,
        b: &StatArray<CpuRuntime>,
    ) -> Result<StatArray<CpuRuntime>> {
        binary_op_impl(self, BinaryOp::Div, a, b)
    }

    fn pow(
        &self,
        a: &StatArray<CpuRuntime>,
        b: &StatArray<CpuRuntime>,
    ) -> Result<StatArray<CpuRuntime>> {
        binary_op_impl(self, BinaryOp::Pow, a, b)
    }
}
