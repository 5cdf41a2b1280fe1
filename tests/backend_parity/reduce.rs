// Backend parity tests for ReduceOps
//
// Both backends accumulate in f64 but combine partials in different orders,
// so sums are compared with a tolerance. Min and max are exact.

use statarray::prelude::*;
use statarray::runtime::cuda::CudaRuntime;

use crate::common::create_cpu_client;
use crate::helpers::*;

#[test]
fn test_reduce_parity() {
    let cpu = create_cpu_client();
    // Lengths on both sides of the block size and the block-count cap
    for n in [1usize, 2, 255, 256, 257, 262_144, 262_145, 1_000_003] {
        let data = sample_data(n);
        for dtype in DTYPES {
            let cpu_a = array_from_f64::<CpuRuntime>(&cpu, &data, dtype);
            let sum = cpu_a.sum().unwrap();
            let min = cpu_a.min().unwrap();
            let max = cpu_a.max().unwrap();
            let var = cpu_a.variance(0).unwrap();
            // Summation order differs, so the error bound scales with sum(|x|)
            let sum_tol = 1e-12 * data.iter().map(|v| v.abs()).sum::<f64>() + 1e-12;

            with_cuda_backend(|cuda| {
                let a = array_from_f64::<CudaRuntime>(&cuda, &data, dtype);
                // Sums of f32 inputs are still accumulated in f64
                let cuda_sum = a.sum().unwrap();
                assert!(
                    (cuda_sum - sum).abs() <= sum_tol,
                    "sum n={n} {dtype}: cuda {cuda_sum} vs cpu {sum}"
                );
                assert_eq!(a.min().unwrap(), min, "min n={n} {dtype}");
                assert_eq!(a.max().unwrap(), max, "max n={n} {dtype}");
                assert_scalar_parity(a.variance(0).unwrap(), var, dtype, "variance");
            });
        }
    }
}

#[test]
fn test_sum_of_range_on_cuda() {
    with_cuda_backend(|cuda| {
        let n = 4_000_000usize;
        let a = cuda.arange(0.0, n as f64, DType::F64).unwrap();
        assert_eq!(a.sum().unwrap(), (n * (n - 1) / 2) as f64);
        assert_eq!(a.mean().unwrap(), (n - 1) as f64 / 2.0);
    });
}

#[test]
fn test_empty_reductions_on_cuda() {
    with_cuda_backend(|cuda| {
        let a = StatArray::<CudaRuntime>::empty(&cuda, DType::F32);
        assert_eq!(a.sum().unwrap(), 0.0);
        assert!(matches!(a.mean(), Err(Error::EmptyArray { .. })));
        assert!(matches!(a.min(), Err(Error::EmptyArray { .. })));
    });
}

#[test]
fn test_min_max_skip_nan_on_cuda() {
    with_cuda_backend(|cuda| {
        let a = StatArray::<CudaRuntime>::from_slice(&cuda, &[f64::NAN, 4.0, -2.0, f64::NAN])
            .unwrap();
        assert_eq!(a.min().unwrap(), -2.0);
        assert_eq!(a.max().unwrap(), 4.0);
    });
}
