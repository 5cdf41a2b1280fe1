//! Shared helpers for backend parity tests: assertion utilities, backend lock, client creation.

use crate::common::create_cuda_client;
use statarray::prelude::*;
use statarray::runtime::cuda::CudaClient;
use std::sync::{Mutex, OnceLock};

static CUDA_BACKEND_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Dtypes every parity test runs over
pub const DTYPES: [DType; 2] = [DType::F32, DType::F64];

/// Run `f` with a CUDA client, one test at a time
///
/// Logs and returns without calling `f` when no CUDA device is usable.
pub fn with_cuda_backend<F>(mut f: F)
where
    F: FnMut(CudaClient),
{
    let _guard = CUDA_BACKEND_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    match create_cuda_client() {
        Some(client) => f(client),
        None => log::warn!("no usable CUDA device, skipping parity check"),
    }
}

/// Build an array of `dtype` from f64 values on any backend
pub fn array_from_f64<R: Runtime>(client: &R::Client, data: &[f64], dtype: DType) -> StatArray<R> {
    let result = match dtype {
        DType::F64 => StatArray::<R>::from_slice(client, data),
        DType::F32 => {
            let narrowed: Vec<f32> = data.iter().map(|&v| v as f32).collect();
            StatArray::<R>::from_slice(client, &narrowed)
        }
    };
    result.unwrap_or_else(|e| panic!("{} from_slice failed for {dtype}: {e}", R::name()))
}

/// Relative and absolute tolerance for comparing backends in `dtype`
pub fn tolerance(dtype: DType) -> (f64, f64) {
    match dtype {
        DType::F32 => (1e-5, 1e-6),
        DType::F64 => (1e-12, 1e-14),
    }
}

/// Assert two scalars agree within the dtype's tolerance
pub fn assert_scalar_parity(cuda: f64, cpu: f64, dtype: DType, op: &str) {
    let (rtol, atol) = tolerance(dtype);
    if cuda.is_nan() && cpu.is_nan() {
        return;
    }
    let diff = (cuda - cpu).abs();
    let tol = atol + rtol * cpu.abs();
    assert!(
        diff <= tol,
        "parity[{op}, {dtype}]: cuda {cuda} vs cpu {cpu} (diff={diff}, tol={tol})"
    );
}

/// Assert two arrays hold the same values within the dtype's tolerance
pub fn assert_array_parity(
    cuda: &StatArray<statarray::runtime::cuda::CudaRuntime>,
    cpu: &StatArray<CpuRuntime>,
    op: &str,
) {
    assert_eq!(cuda.dtype(), cpu.dtype(), "parity[{op}]: dtype mismatch");
    assert_eq!(
        cuda.len(),
        cpu.len(),
        "parity[{op}]: length mismatch: {} vs {}",
        cuda.len(),
        cpu.len()
    );
    let a = cuda
        .to_f64_vec()
        .unwrap_or_else(|e| panic!("parity[{op}]: CUDA readback failed: {e}"));
    let b = cpu.to_f64_vec().unwrap_or_else(|e| panic!("parity[{op}]: CPU readback failed: {e}"));

    let dtype = cpu.dtype();
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        if x.is_nan() && y.is_nan() {
            continue;
        }
        if x.is_infinite() || y.is_infinite() {
            assert_eq!(x, y, "parity[{op}, {dtype}] at index {i}: {x} vs {y}");
            continue;
        }
        let (rtol, atol) = tolerance(dtype);
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "parity[{op}, {dtype}] at index {i}: {x} vs {y} (diff={diff}, tol={tol})"
        );
    }
}

/// Deterministic, unsorted test data with repeats and a wide range
pub fn sample_data(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let h = statarray::runtime::splitmix64(i as u64);
            ((h % 20_000) as f64 - 10_000.0) / 64.0
        })
        .collect()
}
