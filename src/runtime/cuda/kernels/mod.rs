//! CUDA kernels for array operations
//!
//! Kernels are written in CUDA C++ (.cu files) and compiled to PTX by
//! build.rs. The PTX is loaded at runtime and cached per device.
//!
//! # Module Organization
//!
//! - `loader` - Module loading, caching, and launch configuration
//! - `binary` - Vector-vector arithmetic (add, sub, mul, div, pow)
//! - `scalar` - Scalar broadcast in either position, clamp
//! - `reduce` - Block-partial reductions (sum, min, max, squared deviations)
//! - `sort` - Bitonic sort with NaN-last ordering, in-place reversal
//! - `distributions` - Standard-normal sampling
//! - `utility` - Ranges and constant fills

mod binary;
mod distributions;
mod loader;
mod reduce;
mod scalar;
mod sort;
mod utility;

pub use binary::launch_binary_op;
pub use distributions::launch_randn;
pub use reduce::{combine_partials, launch_reduce, launch_sum_squared_deviations, partial_count};
pub use scalar::{launch_clamp, launch_scalar_op};
pub use sort::{launch_bitonic_sort, launch_reverse};
pub use utility::{launch_arange, launch_fill};
