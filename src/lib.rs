//! # statarray
//!
//! **Device-resident float arrays with parallel arithmetic, reductions, and
//! order statistics.**
//!
//! statarray provides a one-dimensional array whose storage lives on a compute
//! device (host memory with rayon-parallel kernels, or an NVIDIA GPU) while
//! calling code treats it as an ordinary sequence of `f32` or `f64` values.
//!
//! ## Features
//!
//! - **Growable storage**: `push`, `extend_from_slice`, `resize` with
//!   geometric growth and device-to-device copies
//! - **Element-wise arithmetic**: vector-vector and scalar broadcast in either
//!   operand position
//! - **Reductions**: pairwise sum, mean, min, max, variance
//! - **Order statistics**: sort, median, quartiles, IQR, quantiles,
//!   winsorization
//! - **Generators**: ranges, constant fills, standard-normal samples
//! - **CSV round trip**: one value per line, bit-exact
//!
//! ## Quick Start
//!
//! ```rust
//! use statarray::prelude::*;
//!
//! let client = CpuRuntime::create_client(&RuntimeConfig::new().with_seed(1))?;
//!
//! let x = client.arange(0.0, 100.0, DType::F64)?;
//! assert_eq!(x.sum()?, 4950.0);
//!
//! let noisy = x.add(&client.randn(100, DType::F64)?)?;
//! let q = noisy.quartiles()?;
//! assert!(q.lower < q.median && q.median < q.upper);
//! # Ok::<(), statarray::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded CPU kernels
//! - `cuda`: NVIDIA CUDA backend (kernels compiled with `nvcc` at build time)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod array;
pub mod dtype;
pub mod error;
pub mod io;
pub mod ops;
pub mod polynomial;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::array::{SortOrder, StatArray};
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{
        ArrayOps, BinaryOps, Quartiles, RandomOps, ReduceOps, ScalarOps, SortDirection,
        SortingOps, StatisticalOps, UtilityOps,
    };
    pub use crate::polynomial::Polynomial;
    pub use crate::runtime::{
        Device, ParallelismConfig, Runtime, RuntimeClient, RuntimeConfig,
    };

    pub use crate::runtime::cpu::CpuRuntime;

    #[cfg(feature = "cuda")]
    pub use crate::runtime::cuda::CudaRuntime;
}

/// Default runtime: CUDA when the `cuda` feature is enabled, CPU otherwise
#[cfg(feature = "cuda")]
pub type DefaultRuntime = runtime::cuda::CudaRuntime;

/// Default runtime: CUDA when the `cuda` feature is enabled, CPU otherwise
#[cfg(not(feature = "cuda"))]
pub type DefaultRuntime = runtime::cpu::CpuRuntime;
