//! CPU implementation of scalar operations.

use crate::array::StatArray;
use crate::error::Result;
use crate::ops::{BinaryOp, ScalarOps, ScalarSide};
use crate::runtime::cpu::{
    CpuClient, CpuRuntime,
    helpers::{clamp_impl, scalar_op_impl},
};

/// ScalarOps implementation for CPU runtime.
impl ScalarOps<CpuRuntime> for CpuClient {
    fn scalar_op(
        &self,
        op: BinaryOp,
        a: &StatArray<CpuRuntime>,
        scalar: f64,
        side: ScalarSide,
    ) -> Result<StatArray<CpuRuntime>> {
        scalar_op_impl(self, op, a, scalar, side)
    }

    fn clamp(
        &self,
        a: &StatArray<CpuRuntime>,
        min_val: f64,
        max_val: f64,
    ) -> Result<StatArray<CpuRuntime>> {
        clamp_impl(self, a, min_val, max_val)
    }
}
