// Backend parity tests for device buffers and generators

use statarray::prelude::*;
use statarray::runtime::Allocator;
use statarray::runtime::cuda::CudaRuntime;

use crate::common::create_cpu_client;
use crate::helpers::*;

#[test]
fn test_push_resize_parity() {
    let cpu = create_cpu_client();
    for dtype in DTYPES {
        let mut cpu_a = StatArray::<CpuRuntime>::empty(&cpu, dtype);
        for i in 0..1000 {
            cpu_a.push(i as f64 * 0.25).unwrap();
        }
        cpu_a.resize(1500).unwrap();

        with_cuda_backend(|cuda| {
            let mut a = StatArray::<CudaRuntime>::empty(&cuda, dtype);
            for i in 0..1000 {
                a.push(i as f64 * 0.25).unwrap();
            }
            assert!(a.capacity() >= 1000);
            a.resize(1500).unwrap();
            assert_array_parity(&a, &cpu_a, "push + resize");
            assert!(matches!(
                a.get(1500),
                Err(Error::IndexOutOfBounds { index: 1500, size: 1500 })
            ));
        });
    }
}

#[test]
fn test_generators_parity() {
    let cpu = create_cpu_client();
    for dtype in DTYPES {
        let range = cpu.arange(-5.0, 70_000.5, dtype).unwrap();
        let full = cpu.full(3000, -1.5, dtype).unwrap();
        with_cuda_backend(|cuda| {
            assert_array_parity(&cuda.arange(-5.0, 70_000.5, dtype).unwrap(), &range, "arange");
            assert_array_parity(&cuda.full(3000, -1.5, dtype).unwrap(), &full, "full");
        });
    }
}

#[test]
fn test_clone_is_deep_on_cuda() {
    with_cuda_backend(|cuda| {
        let a = StatArray::<CudaRuntime>::from_slice(&cuda, &[1.0f32, 2.0, 3.0]).unwrap();
        let mut b = a.try_clone().unwrap();
        b.set(0, 9.0).unwrap();
        assert_eq!(a.to_vec::<f32>().unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(b.to_vec::<f32>().unwrap(), vec![9.0, 2.0, 3.0]);
    });
}

#[test]
fn test_memory_limit_on_cuda() {
    with_cuda_backend(|_| {
        let config = RuntimeConfig::new().with_memory_limit(4096);
        let cuda = CudaRuntime::create_client(&config).unwrap();
        let a = cuda.zeros(512, DType::F64).unwrap();
        assert_eq!(cuda.allocator().allocated_bytes(), 4096);

        let err = cuda.zeros(1, DType::F64).unwrap_err();
        assert!(err.is_out_of_memory());
        assert_eq!(a.get(511).unwrap(), 0.0);

        drop(a);
        assert_eq!(cuda.allocator().allocated_bytes(), 0);
    });
}

#[test]
fn test_extreme_range_on_cuda() {
    with_cuda_backend(|cuda| {
        let err = cuda.arange(0.0, 1e19, DType::F64).unwrap_err();
        assert!(err.is_out_of_memory(), "{err}");
    });
}

#[test]
fn test_csv_round_trip_from_cuda() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cuda.csv");
    let cpu = create_cpu_client();
    with_cuda_backend(|cuda| {
        let a = cuda.randn(5000, DType::F32).unwrap();
        a.to_csv(&path).unwrap();
        let back = StatArray::<CpuRuntime>::from_csv(&cpu, &path, DType::F32).unwrap();
        assert_eq!(back.to_vec::<f32>().unwrap(), a.to_vec::<f32>().unwrap());
    });
}

#[test]
fn test_device_refusal_is_out_of_memory() {
    with_cuda_backend(|cuda| {
        crate::common::init_logger();
        // 1 PiB passes every host-side check and is refused by the driver
        let err = CudaRuntime::allocate(1 << 50, cuda.device()).unwrap_err();
        assert!(matches!(err, Error::OutOfMemory { size } if size == 1 << 50));
    });
}
