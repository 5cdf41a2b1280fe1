//! Integration tests for whole-array reductions

mod common;

use common::create_cpu_client;
use statarray::prelude::*;

#[test]
fn test_sum_of_range() {
    let client = create_cpu_client();
    for n in [1usize, 2, 7, 1000, 65_537, 1_000_000] {
        let a = client.arange(0.0, n as f64, DType::F64).unwrap();
        let expected = (n * (n - 1) / 2) as f64;
        assert_eq!(a.sum().unwrap(), expected, "sum(range(0, {n}))");
    }
}

#[test]
fn test_sum_f32_is_pairwise() {
    let client = create_cpu_client();
    // Sequential f32 accumulation of 2^24 + 1 ones stalls at 2^24
    let n = (1usize << 24) + 8;
    let a = client.full(n, 1.0, DType::F32).unwrap();
    assert_eq!(a.sum().unwrap(), n as f64);
}

#[test]
fn test_sum_of_empty_is_zero() {
    let client = create_cpu_client();
    let a = StatArray::<CpuRuntime>::empty(&client, DType::F64);
    assert_eq!(a.sum().unwrap(), 0.0);
}

#[test]
fn test_mean() {
    let client = create_cpu_client();
    let a = StatArray::<CpuRuntime>::from_slice(&client, &[1.0f64, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(a.mean().unwrap(), 2.5);
    assert_eq!(a.mean().unwrap(), a.sum().unwrap() / a.len() as f64);
}

#[test]
fn test_mean_of_empty_fails() {
    let client = create_cpu_client();
    let a = StatArray::<CpuRuntime>::empty(&client, DType::F32);
    assert!(matches!(a.mean(), Err(Error::EmptyArray { op: "mean" })));
}

#[test]
fn test_min_max() {
    let client = create_cpu_client();
    let a = StatArray::<CpuRuntime>::from_slice(&client, &[3.0f32, -7.5, 12.0, 0.0]).unwrap();
    assert_eq!(a.min().unwrap(), -7.5);
    assert_eq!(a.max().unwrap(), 12.0);

    let empty = StatArray::<CpuRuntime>::empty(&client, DType::F64);
    assert!(matches!(empty.min(), Err(Error::EmptyArray { op: "min" })));
    assert!(matches!(empty.max(), Err(Error::EmptyArray { op: "max" })));
}

#[test]
fn test_min_max_skip_nan() {
    let client = create_cpu_client();
    let a = StatArray::<CpuRuntime>::from_slice(&client, &[f64::NAN, 2.0, -1.0, f64::NAN]).unwrap();
    assert_eq!(a.min().unwrap(), -1.0);
    assert_eq!(a.max().unwrap(), 2.0);

    let all_nan = StatArray::<CpuRuntime>::from_slice(&client, &[f64::NAN; 3]).unwrap();
    assert!(all_nan.min().unwrap().is_nan());
}

#[test]
fn test_sum_propagates_nan_and_inf() {
    let client = create_cpu_client();
    let a = StatArray::<CpuRuntime>::from_slice(&client, &[1.0f64, f64::INFINITY]).unwrap();
    assert_eq!(a.sum().unwrap(), f64::INFINITY);
    let b = StatArray::<CpuRuntime>::from_slice(&client, &[1.0f64, f64::NAN]).unwrap();
    assert!(b.sum().unwrap().is_nan());
}

#[test]
fn test_variance_and_std_dev() {
    let client = create_cpu_client();
    let a = StatArray::<CpuRuntime>::from_slice(&client, &[2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
        .unwrap();
    assert_eq!(a.variance(0).unwrap(), 4.0);
    assert_eq!(a.std_dev(0).unwrap(), 2.0);
    assert!((a.variance(1).unwrap() - 32.0 / 7.0).abs() < 1e-12);

    let single = StatArray::<CpuRuntime>::from_slice(&client, &[1.0f64]).unwrap();
    assert_eq!(single.variance(0).unwrap(), 0.0);
    assert!(matches!(single.variance(1), Err(Error::EmptyArray { .. })));
}

#[test]
fn test_reductions_via_client_traits() {
    let client = create_cpu_client();
    let a = StatArray::<CpuRuntime>::from_slice(&client, &[1.0f64, 2.0, 3.0]).unwrap();
    assert_eq!(ReduceOps::sum(&client, &a).unwrap(), 6.0);
    assert_eq!(client.sum_squared_deviations(&a, 2.0).unwrap(), 2.0);
}

#[test]
fn test_parallel_sum_matches_single_thread() {
    let data: Vec<f64> = (0..200_000).map(|i| ((i * 7919) % 1000) as f64 * 0.001).collect();

    let serial = CpuRuntime::create_client(
        &RuntimeConfig::new().with_parallelism(ParallelismConfig::new(Some(1), None)),
    )
    .unwrap();
    let parallel = CpuRuntime::create_client(
        &RuntimeConfig::new().with_parallelism(ParallelismConfig::new(Some(4), Some(1024))),
    )
    .unwrap();

    let a = StatArray::<CpuRuntime>::from_slice(&serial, &data).unwrap();
    let b = StatArray::<CpuRuntime>::from_slice(&parallel, &data).unwrap();
    let expected: f64 = data.iter().sum();
    assert!((a.sum().unwrap() - expected).abs() < 1e-6);
    assert!((b.sum().unwrap() - expected).abs() < 1e-6);
}
