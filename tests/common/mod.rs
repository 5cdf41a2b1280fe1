//! Common test utilities
#![allow(dead_code)]

use statarray::prelude::*;
use statarray::runtime::cpu::CpuClient;
#[cfg(feature = "cuda")]
use statarray::runtime::cuda::{CudaClient, CudaRuntime};

/// Seed shared by every test client so random draws are reproducible
pub const TEST_SEED: u64 = 0x5eed;

/// Route `log` output through the test harness; safe to call repeatedly
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a seeded CPU client for testing
pub fn create_cpu_client() -> CpuClient {
    init_logger();
    CpuRuntime::create_client(&RuntimeConfig::new().with_seed(TEST_SEED))
        .expect("the host backend is always available")
}

/// Create a seeded CUDA client, returning None if CUDA is unavailable
#[cfg(feature = "cuda")]
pub fn create_cuda_client() -> Option<CudaClient> {
    init_logger();
    if !statarray::runtime::cuda::is_cuda_available() {
        return None;
    }
    CudaRuntime::create_client(&RuntimeConfig::new().with_seed(TEST_SEED)).ok()
}

/// Array from f64 values on any backend
pub fn array_f64<R: Runtime>(client: &R::Client, data: &[f64]) -> StatArray<R> {
    StatArray::<R>::from_slice(client, data).expect("from_slice failed")
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        if x.is_nan() && y.is_nan() {
            continue;
        }
        if x.is_infinite() || y.is_infinite() {
            assert_eq!(x, y, "{}: element {} differs: {} vs {}", msg, i, x, y);
            continue;
        }
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f32 slices are close within tolerance
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
