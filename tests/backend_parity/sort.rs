// Backend parity tests for SortingOps
//
// Sorting is exact: CUDA output must equal the CPU output element for
// element, including NaN placement.

use statarray::prelude::*;
use statarray::runtime::cuda::CudaRuntime;

use crate::common::create_cpu_client;
use crate::helpers::*;

#[test]
fn test_sort_parity() {
    let cpu = create_cpu_client();
    // Powers of two sort in place; other lengths go through a padded scratch buffer
    for n in [0usize, 1, 2, 3, 64, 1000, 1024, 65_537] {
        let data = sample_data(n);
        for dtype in DTYPES {
            let cpu_a = array_from_f64::<CpuRuntime>(&cpu, &data, dtype);
            let asc = cpu_a.sorted(SortDirection::Ascending).unwrap();
            let desc = cpu_a.sorted(SortDirection::Descending).unwrap();

            with_cuda_backend(|cuda| {
                let mut a = array_from_f64::<CudaRuntime>(&cuda, &data, dtype);
                let cuda_desc = a.sorted(SortDirection::Descending).unwrap();
                assert_array_parity(&cuda_desc, &desc, &format!("sort desc n={n}"));
                assert_eq!(cuda_desc.sort_order(), SortOrder::Descending);

                a.sort().unwrap();
                assert_array_parity(&a, &asc, &format!("sort asc n={n}"));
                assert_eq!(a.sort_order(), SortOrder::Ascending);
            });
        }
    }
}

#[test]
fn test_sort_nan_placement_parity() {
    let cpu = create_cpu_client();
    let data = [2.0, f64::NAN, -1.0, f64::INFINITY, f64::NAN, f64::NEG_INFINITY, 0.5];
    for dtype in DTYPES {
        let cpu_a = array_from_f64::<CpuRuntime>(&cpu, &data, dtype);
        with_cuda_backend(|cuda| {
            let a = array_from_f64::<CudaRuntime>(&cuda, &data, dtype);
            for dir in [SortDirection::Ascending, SortDirection::Descending] {
                assert_array_parity(
                    &a.sorted(dir).unwrap(),
                    &cpu_a.sorted(dir).unwrap(),
                    &format!("sort nan {dir:?}"),
                );
            }
        });
    }
}

#[test]
fn test_sort_scratch_respects_memory_limit() {
    with_cuda_backend(|_| {
        let config = RuntimeConfig::new().with_memory_limit(1000 * 8 + 1000 * 8);
        let cuda = match CudaRuntime::create_client(&config) {
            Ok(client) => client,
            Err(e) => panic!("CUDA client creation failed: {e}"),
        };
        // 1000 elements pad to 1024: one copy fits, the copy plus scratch does not
        let a = cuda.arange(0.0, 1000.0, DType::F64).unwrap();
        let err = a.sorted(SortDirection::Descending).unwrap_err();
        assert!(err.is_out_of_memory(), "{err}");
        assert_eq!(a.get(999).unwrap(), 999.0);
    });
}
