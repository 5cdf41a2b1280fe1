// Backend parity tests for RandomOps
//
// The backends use different generators, so draws are compared by their
// statistics rather than value by value.

use statarray::prelude::*;
use statarray::runtime::cuda::CudaRuntime;

use crate::common::TEST_SEED;
use crate::helpers::*;

#[test]
fn test_randn_moments_on_cuda() {
    with_cuda_backend(|cuda| {
        for dtype in DTYPES {
            let a = cuda.randn(1_000_001, dtype).unwrap();
            assert_eq!(a.len(), 1_000_001);
            let mean = a.mean().unwrap();
            let var = a.variance(1).unwrap();
            assert!(mean.abs() < 0.01, "mean = {mean} ({dtype})");
            assert!((var - 1.0).abs() < 0.01, "variance = {var} ({dtype})");
            let values = a.to_f64_vec().unwrap();
            assert!(values.iter().all(|v| v.is_finite()));
        }
    });
}

#[test]
fn test_randn_reproducible_on_cuda() {
    with_cuda_backend(|_| {
        let config = RuntimeConfig::new().with_seed(TEST_SEED);
        let c1 = CudaRuntime::create_client(&config).unwrap();
        let c2 = CudaRuntime::create_client(&config).unwrap();
        let a = c1.randn(10_000, DType::F64).unwrap().to_vec::<f64>().unwrap();
        let b = c2.randn(10_000, DType::F64).unwrap().to_vec::<f64>().unwrap();
        assert_eq!(a, b);

        let next = c1.randn(10_000, DType::F64).unwrap().to_vec::<f64>().unwrap();
        assert_ne!(a, next);
    });
}
