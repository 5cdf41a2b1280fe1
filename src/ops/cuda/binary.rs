//! CUDA implementation of binary operations.

use crate::array::StatArray;
use crate::error::Result;
use crate::ops::{BinaryOp, BinaryOps};
use crate::runtime::cuda::{CudaClient, CudaRuntime, helpers::binary_op_impl};

/// BinaryOps implementation for CUDA runtime.
impl BinaryOps<CudaRuntime> for CudaClient {
    fn add(
        &self,
        a: &StatArray<CudaRuntime>,
        b: &StatArray<CudaRuntime>,
    ) -> Result<StatArray<CudaRuntime>> {
        binary_op_impl(self, BinaryOp::Add, a, b)
    }

    fn sub(
        &self,
        a: &StatArray<CudaRuntime>,
        b: &StatArray<CudaRuntime>,
    ) -> Result<StatArray<CudaRuntime>> {
        binary_op_impl(self, BinaryOp::Sub, a, b)
    }

    fn mul(
        &self,
        a: &StatArray<CudaRuntime>,
        b: &StatArray<CudaRuntime>,
    ) -> Result<StatArray<CudaRuntime>> {
        binary_op_impl(self, BinaryOp::Mul, a, b)
    }

    fn div(
        &self,
        a: &StatArray<CudaRuntime>,
        b: &StatArray<CudaRuntime>,
    ) -> Result<StatArray<CudaRuntime>> {
        binary_op_impl(self, BinaryOp::Div, a, b)
    }

    fn pow(
        &self,
        a: &StatArray<CudaRuntime>,
        b: &StatArray<CudaRuntime>,
    ) -> Result<StatArray<CudaRuntime>> {
        binary_op_impl(self, BinaryOp::Pow, a, b)
    }
}
