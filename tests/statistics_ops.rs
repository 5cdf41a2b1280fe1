//! Integration tests for order statistics
//!
//! Quartiles follow the median-of-halves convention: the lower quartile is
//! the median of `s[0..n/2)`, the upper quartile the median of
//! `s[n - n/2..n)`, and for odd `n` the central element belongs to neither
//! half.

mod common;

use common::create_cpu_client;
use statarray::prelude::*;
use statarray::runtime::cpu::CpuClient;

fn array(client: &CpuClient, data: &[f64]) -> StatArray<CpuRuntime> {
    StatArray::<CpuRuntime>::from_slice(client, data).unwrap()
}

// ============================================================================
// Median and Quartiles
// ============================================================================

#[test]
fn test_quartiles_even_count() {
    let client = create_cpu_client();
    let a = array(&client, &[4.0, 1.0, 3.0, 2.0]);
    assert_eq!(a.median().unwrap(), 2.5);
    assert_eq!(a.lquart().unwrap(), 1.5);
    assert_eq!(a.uquart().unwrap(), 3.5);
    assert_eq!(a.iqr().unwrap(), 2.0);
}

#[test]
fn test_quartiles_odd_count() {
    let client = create_cpu_client();
    let a = array(&client, &[5.0, 3.0, 1.0, 4.0, 2.0]);
    assert_eq!(a.median().unwrap(), 3.0);
    // Halves are [1, 2] and [4, 5]; the median 3 is excluded
    assert_eq!(a.lquart().unwrap(), 1.5);
    assert_eq!(a.uquart().unwrap(), 4.5);
    assert_eq!(a.iqr().unwrap(), 3.0);
}

#[test]
fn test_quartiles_small_counts() {
    let client = create_cpu_client();

    let one = array(&client, &[7.0]);
    let q = one.quartiles().unwrap();
    assert_eq!((q.lower, q.median, q.upper), (7.0, 7.0, 7.0));

    let two = array(&client, &[2.0, 1.0]);
    let q = two.quartiles().unwrap();
    assert_eq!((q.lower, q.median, q.upper), (1.0, 1.5, 2.0));

    let three = array(&client, &[3.0, 1.0, 2.0]);
    let q = three.quartiles().unwrap();
    assert_eq!((q.lower, q.median, q.upper), (1.0, 2.0, 3.0));
}

#[test]
fn test_quartiles_struct_matches_individual_calls() {
    let client = create_cpu_client();
    let a = client.randn(1001, DType::F64).unwrap();
    let q = a.quartiles().unwrap();
    assert_eq!(q.lower, a.lquart().unwrap());
    assert_eq!(q.median, a.median().unwrap());
    assert_eq!(q.upper, a.uquart().unwrap());
    assert_eq!(q.iqr(), a.iqr().unwrap());
    assert!(q.lower <= q.median && q.median <= q.upper);
}

#[test]
fn test_statistics_do_not_modify_receiver() {
    let client = create_cpu_client();
    let a = array(&client, &[3.0, 1.0, 2.0]);
    let _ = a.median().unwrap();
    let _ = a.iqr().unwrap();
    assert_eq!(a.to_vec::<f64>().unwrap(), vec![3.0, 1.0, 2.0]);
    assert_eq!(a.sort_order(), SortOrder::Unsorted);
}

#[test]
fn test_presorted_arrays_give_same_results() {
    let client = create_cpu_client();
    let a = client.randn(500, DType::F32).unwrap();
    let asc = a.sorted(SortDirection::Ascending).unwrap();
    let desc = a.sorted(SortDirection::Descending).unwrap();

    let expected = a.quartiles().unwrap();
    assert_eq!(asc.quartiles().unwrap(), expected);
    assert_eq!(desc.quartiles().unwrap(), expected);
    assert_eq!(desc.quantile(0.9).unwrap(), a.quantile(0.9).unwrap());
}

#[test]
fn test_statistics_of_empty_fail() {
    let client = create_cpu_client();
    let a = StatArray::<CpuRuntime>::empty(&client, DType::F64);
    assert!(matches!(a.median(), Err(Error::EmptyArray { .. })));
    assert!(matches!(a.lquart(), Err(Error::EmptyArray { .. })));
    assert!(matches!(a.uquart(), Err(Error::EmptyArray { .. })));
    assert!(matches!(a.iqr(), Err(Error::EmptyArray { .. })));
    assert!(matches!(a.quantile(0.5), Err(Error::EmptyArray { .. })));
}

// ============================================================================
// Quantile
// ============================================================================

#[test]
fn test_quantile_interpolates() {
    let client = create_cpu_client();
    let a = array(&client, &[10.0, 40.0, 20.0, 30.0]);
    assert_eq!(a.quantile(0.0).unwrap(), 10.0);
    assert_eq!(a.quantile(1.0).unwrap(), 40.0);
    assert_eq!(a.quantile(0.5).unwrap(), 25.0);
    // Position 0.25 * 3 = 0.75 between 10 and 20
    assert_eq!(a.quantile(0.25).unwrap(), 17.5);
}

#[test]
fn test_quantile_rejects_out_of_range() {
    let client = create_cpu_client();
    let a = array(&client, &[1.0, 2.0]);
    for q in [-0.1, 1.5, f64::NAN] {
        match a.quantile(q) {
            Err(Error::InvalidArgument { arg, .. }) => assert_eq!(arg, "q"),
            other => panic!("expected InvalidArgument for q={q}, got {other:?}"),
        }
    }
}

// ============================================================================
// Winsorization
// ============================================================================

#[test]
fn test_winsorized_quarter() {
    let client = create_cpu_client();
    let a = array(&client, &[8.0, 1.0, 7.0, 2.0, 6.0, 3.0, 5.0, 4.0]);
    let w = a.winsorized(0.25).unwrap();
    // k = 2: lo = s[2] = 3, hi = s[5] = 6; element order is preserved
    assert_eq!(
        w.to_vec::<f64>().unwrap(),
        vec![6.0, 3.0, 6.0, 3.0, 6.0, 3.0, 5.0, 4.0]
    );
    assert_eq!(a.to_vec::<f64>().unwrap()[0], 8.0);
}

#[test]
fn test_winsorized_sorted_input() {
    let client = create_cpu_client();
    let mut a = client.arange(1.0, 9.0, DType::F64).unwrap();
    a.sort().unwrap();
    let w = a.winsorized(0.25).unwrap();
    assert_eq!(
        w.to_vec::<f64>().unwrap(),
        vec![3.0, 3.0, 3.0, 4.0, 5.0, 6.0, 6.0, 6.0]
    );
    assert_eq!(w.sort_order(), SortOrder::Ascending);
}

#[test]
fn test_winsorized_zero_fraction_is_copy() {
    let client = create_cpu_client();
    let a = array(&client, &[3.0, -100.0, 100.0]);
    let w = a.winsorized(0.0).unwrap();
    assert_eq!(w.to_vec::<f64>().unwrap(), vec![3.0, -100.0, 100.0]);

    // floor(0.1 * 3) = 0 also leaves every value alone
    let w = a.winsorized(0.1).unwrap();
    assert_eq!(w.to_vec::<f64>().unwrap(), vec![3.0, -100.0, 100.0]);

    let empty = StatArray::<CpuRuntime>::empty(&client, DType::F64);
    assert!(empty.winsorized(0.2).unwrap().is_empty());
}

#[test]
fn test_winsorized_leaves_nan_and_clamps_both_tails() {
    let client = create_cpu_client();
    let nan = f64::NAN;
    let a = array(&client, &[1.0, 2.0, 3.0, 4.0, 100.0, nan, nan, nan]);
    let w = a.winsorized(0.25).unwrap().to_vec::<f64>().unwrap();
    // Ranks run over the five numbers: k = 1, bounds 2 and 4
    assert_eq!(&w[..5], &[2.0, 2.0, 3.0, 4.0, 4.0]);
    assert!(w[5..].iter().all(|v| v.is_nan()));

    let mut sorted = a.try_clone().unwrap();
    sorted.sort().unwrap();
    let w = sorted.winsorized(0.25).unwrap().to_vec::<f64>().unwrap();
    assert_eq!(&w[..5], &[2.0, 2.0, 3.0, 4.0, 4.0]);
}

#[test]
fn test_winsorized_rejects_bad_fraction() {
    let client = create_cpu_client();
    let a = array(&client, &[1.0, 2.0, 3.0, 4.0]);
    for fraction in [0.5, 0.75, -0.01, f64::NAN] {
        match a.winsorized(fraction) {
            Err(Error::InvalidArgument { arg, reason }) => {
                assert_eq!(arg, "fraction");
                assert!(reason.contains("[0, 0.5)"), "{reason}");
            }
            other => panic!("expected InvalidArgument for {fraction}, got {other:?}"),
        }
    }
}

#[test]
fn test_winsorized_bounds_tails_of_normal_sample() {
    let client = create_cpu_client();
    let a = client.randn(10_000, DType::F64).unwrap();
    let w = a.winsorized(0.05).unwrap();
    assert_eq!(w.len(), a.len());
    assert!(w.min().unwrap() > a.min().unwrap());
    assert!(w.max().unwrap() < a.max().unwrap());
    assert_eq!(w.median().unwrap(), a.median().unwrap());
}
