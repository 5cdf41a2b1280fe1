//! CUDA implementation of scalar operations.

use crate::array::StatArray;
use crate::error::Result;
use crate::ops::{BinaryOp, ScalarOps, ScalarSide};
use crate::runtime::cuda::{
    CudaClient, CudaRuntime,
    helpers::{clamp_impl, scalar_op_impl},
};

/// ScalarOps implementation for CUDA runtime.
impl ScalarOps<CudaRuntime> for CudaClient {
    fn scalar_op(
        &self,
        op: BinaryOp,
        a: &StatArray<CudaRuntime>,
        scalar: f64,
        side: ScalarSide,
    ) -> Result<StatArray<CudaRuntime>> {
        scalar_op_impl(self, op, a, scalar, side)
    }

    fn clamp(
        &self,
        a: &StatArray<CudaRuntime>,
        min_val: f64,
        max_val: f64,
    ) -> Result<StatArray<CudaRuntime>> {
        clamp_impl(self, a, min_val, max_val)
    }
}
