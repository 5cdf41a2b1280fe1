// Backend parity tests for StatisticalOps
//
// Order statistics are composed from the same generic code on both backends,
// so only the sort underneath differs; results must match exactly.

use statarray::prelude::*;
use statarray::runtime::cuda::CudaRuntime;

use crate::common::create_cpu_client;
use crate::helpers::*;

#[test]
fn test_quartiles_parity() {
    let cpu = create_cpu_client();
    for n in [1usize, 4, 5, 8, 999, 10_000] {
        let data = sample_data(n);
        for dtype in DTYPES {
            let cpu_a = array_from_f64::<CpuRuntime>(&cpu, &data, dtype);
            let expected = cpu_a.quartiles().unwrap();
            let q90 = cpu_a.quantile(0.9).unwrap();

            with_cuda_backend(|cuda| {
                let a = array_from_f64::<CudaRuntime>(&cuda, &data, dtype);
                assert_eq!(a.quartiles().unwrap(), expected, "quartiles n={n} {dtype}");
                assert_eq!(a.iqr().unwrap(), expected.iqr());
                assert_eq!(a.quantile(0.9).unwrap(), q90);
            });
        }
    }
}

#[test]
fn test_known_quartiles_on_cuda() {
    with_cuda_backend(|cuda| {
        let a = StatArray::<CudaRuntime>::from_slice(&cuda, &[1.0f64, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(a.median().unwrap(), 2.5);
        assert_eq!(a.lquart().unwrap(), 1.5);
        assert_eq!(a.uquart().unwrap(), 3.5);
        assert_eq!(a.iqr().unwrap(), 2.0);

        let b = StatArray::<CudaRuntime>::from_slice(&cuda, &[1.0f64, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(b.median().unwrap(), 3.0);
    });
}

#[test]
fn test_winsorize_parity() {
    let cpu = create_cpu_client();
    let data = sample_data(777);
    for dtype in DTYPES {
        let cpu_a = array_from_f64::<CpuRuntime>(&cpu, &data, dtype);
        for fraction in [0.0, 0.05, 0.25, 0.49] {
            let expected = cpu_a.winsorized(fraction).unwrap();
            with_cuda_backend(|cuda| {
                let a = array_from_f64::<CudaRuntime>(&cuda, &data, dtype);
                let w = a.winsorized(fraction).unwrap();
                assert_array_parity(&w, &expected, &format!("winsorize {fraction}"));
            });
        }
    }
}

#[test]
fn test_winsorize_rejects_bad_fraction_on_cuda() {
    with_cuda_backend(|cuda| {
        let a = cuda.arange(0.0, 8.0, DType::F64).unwrap();
        assert!(matches!(
            a.winsorized(0.5),
            Err(Error::InvalidArgument { .. })
        ));
    });
}
