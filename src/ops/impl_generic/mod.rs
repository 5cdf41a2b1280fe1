//! Generic implementations of composite operations.
//!
//! This module contains backend-agnostic algorithm implementations that are
//! shared by all backends (CPU, CUDA). Each backend delegates to these
//! implementations to ensure numerical parity and reduce code duplication.
//!
//! ```text
//! impl_generic/statistics.rs
//!     └── quartiles_impl<R, C>()
//!             │
//!             ├── ops/cpu/statistics.rs delegates here
//!             └── ops/cuda/statistics.rs delegates here
//! ```

pub mod statistics;

pub use statistics::{
    iqr_impl, lower_quartile_impl, median_impl, quantile_impl, quartiles_impl,
    upper_quartile_impl, winsorize_impl,
};
