// Backend parity tests for BinaryOps and ScalarOps
//
// Dtype-parameterized: each test runs for f32 and f64 and compares CUDA
// output with the CPU reference.

use statarray::ops::{BinaryOp, ScalarSide};
use statarray::prelude::*;
use statarray::runtime::cuda::CudaRuntime;

use crate::helpers::*;
use crate::common::create_cpu_client;

const LENGTHS: [usize; 4] = [1, 255, 257, 100_003];

#[test]
fn test_binary_parity() {
    let cpu = create_cpu_client();
    for dtype in DTYPES {
        for n in LENGTHS {
            let a_data = sample_data(n);
            let b_data: Vec<f64> = sample_data(n + 7)[7..].iter().map(|v| v.abs() + 0.5).collect();
            let cpu_a = array_from_f64::<CpuRuntime>(&cpu, &a_data, dtype);
            let cpu_b = array_from_f64::<CpuRuntime>(&cpu, &b_data, dtype);

            with_cuda_backend(|cuda| {
                let cuda_a = array_from_f64::<CudaRuntime>(&cuda, &a_data, dtype);
                let cuda_b = array_from_f64::<CudaRuntime>(&cuda, &b_data, dtype);
                for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
                    let (x, y) = match op {
                        BinaryOp::Add => (cuda_a.add(&cuda_b), cpu_a.add(&cpu_b)),
                        BinaryOp::Sub => (cuda_a.sub(&cuda_b), cpu_a.sub(&cpu_b)),
                        BinaryOp::Mul => (cuda_a.mul(&cuda_b), cpu_a.mul(&cpu_b)),
                        BinaryOp::Div => (cuda_a.div(&cuda_b), cpu_a.div(&cpu_b)),
                        BinaryOp::Pow => unreachable!(),
                    };
                    let label = format!("{} n={n}", op.name());
                    assert_array_parity(&x.unwrap(), &y.unwrap(), &label);
                }
            });
        }
    }
}

#[test]
fn test_pow_parity() {
    let cpu = create_cpu_client();
    let base: Vec<f64> = (1..=1000).map(|i| i as f64 / 100.0).collect();
    let exp: Vec<f64> = (0..1000).map(|i| (i % 7) as f64 * 0.5 - 1.0).collect();
    for dtype in DTYPES {
        let cpu_a = array_from_f64::<CpuRuntime>(&cpu, &base, dtype);
        let cpu_b = array_from_f64::<CpuRuntime>(&cpu, &exp, dtype);
        let expected = cpu_a.pow(&cpu_b).unwrap();

        with_cuda_backend(|cuda| {
            let cuda_a = array_from_f64::<CudaRuntime>(&cuda, &base, dtype);
            let cuda_b = array_from_f64::<CudaRuntime>(&cuda, &exp, dtype);
            assert_array_parity(&cuda_a.pow(&cuda_b).unwrap(), &expected, "pow");
        });
    }
}

#[test]
fn test_scalar_parity_both_sides() {
    let cpu = create_cpu_client();
    let data: Vec<f64> = sample_data(4099).iter().map(|v| v.abs() + 1.0).collect();
    for dtype in DTYPES {
        let cpu_a = array_from_f64::<CpuRuntime>(&cpu, &data, dtype);

        with_cuda_backend(|cuda| {
            let cuda_a = array_from_f64::<CudaRuntime>(&cuda, &data, dtype);
            for op in [
                BinaryOp::Add,
                BinaryOp::Sub,
                BinaryOp::Mul,
                BinaryOp::Div,
                BinaryOp::Pow,
            ] {
                for side in [ScalarSide::Right, ScalarSide::Left] {
                    let scalar = 1.25;
                    let x = cuda.scalar_op(op, &cuda_a, scalar, side).unwrap();
                    let y = cpu.scalar_op(op, &cpu_a, scalar, side).unwrap();
                    assert_array_parity(&x, &y, &format!("{} {side:?}", op.name()));
                }
            }
        });
    }
}

#[test]
fn test_special_values_parity() {
    let cpu = create_cpu_client();
    let data = [1.0, -1.0, 0.0, f64::NAN, f64::INFINITY, -3.5];
    for dtype in DTYPES {
        let cpu_a = array_from_f64::<CpuRuntime>(&cpu, &data, dtype);
        let cpu_zero = cpu.zeros(data.len(), dtype).unwrap();

        with_cuda_backend(|cuda| {
            let cuda_a = array_from_f64::<CudaRuntime>(&cuda, &data, dtype);
            let cuda_zero = cuda.zeros(data.len(), dtype).unwrap();
            assert_array_parity(
                &cuda_a.div(&cuda_zero).unwrap(),
                &cpu_a.div(&cpu_zero).unwrap(),
                "div by zero",
            );
            assert_array_parity(
                &cuda_a.scalar_div(1.0).unwrap(),
                &cpu_a.scalar_div(1.0).unwrap(),
                "reciprocal",
            );
            assert_array_parity(
                &cuda_a.clamp(-2.0, 0.5).unwrap(),
                &cpu_a.clamp(-2.0, 0.5).unwrap(),
                "clamp",
            );
        });
    }
}

#[test]
fn test_shape_mismatch_on_cuda() {
    with_cuda_backend(|cuda| {
        let a = array_from_f64::<CudaRuntime>(&cuda, &[1.0, 2.0, 3.0], DType::F64);
        let b = array_from_f64::<CudaRuntime>(&cuda, &[1.0, 2.0], DType::F64);
        assert!(matches!(
            a.add(&b),
            Err(Error::ShapeMismatch { lhs: 3, rhs: 2, .. })
        ));
    });
}
