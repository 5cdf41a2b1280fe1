//! Helper functions for CPU array operations
//!
//! Each helper validates its operands, allocates the output through the
//! client's allocator, and runs the kernel on the client's thread pool.

pub mod elementwise;
pub mod generate;
pub mod reduce;
pub mod sort;

pub use elementwise::{binary_op_impl, clamp_impl, scalar_op_impl};
pub use generate::{arange_impl, fill_impl, randn_impl};
pub use crate::runtime::helpers::ReduceKind;
pub use reduce::{reduce_impl, sum_squared_deviations_impl};
pub use sort::sort_in_place_impl;
