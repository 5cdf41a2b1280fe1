//! Operation traits for array operations.
//!
//! This module contains trait definitions for array operations.
//! Implementations are in the backend-specific modules (cpu/, cuda/).

mod binary;
mod random;
mod reduce;
mod scalar;
mod sorting;
mod statistics;
mod utility;

pub use binary::BinaryOps;
pub use random::RandomOps;
pub use reduce::ReduceOps;
pub use scalar::ScalarOps;
pub use sorting::{SortDirection, SortingOps};
pub use statistics::{Quartiles, StatisticalOps};
pub use utility::{UtilityOps, arange_len};
