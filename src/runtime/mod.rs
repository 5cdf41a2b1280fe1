//! Runtime backends for array computation
//!
//! This module defines the `Runtime` trait and provides implementations
//! for the host (CPU) and CUDA backends.
//!
//! # Architecture
//!
//! ```text
//! Runtime (backend identity)
//! ├── Device (identifies a specific GPU/CPU)
//! ├── Client (dispatches operations, owns stream/pool, seed sequence)
//! └── Allocator (memory management with byte tracking and limits)
//! ```
//!
//! Clients are built from an explicit [`RuntimeConfig`]; there is no global
//! device selection.

mod allocator;
mod config;
pub(crate) mod helpers;
mod seed;
pub mod traits;

pub mod cpu;

#[cfg(feature = "cuda")]
pub mod cuda;

pub use allocator::{Allocator, DefaultAllocator};
pub use config::{ParallelismConfig, RuntimeConfig};
pub use seed::{SeedSequence, splitmix64};
pub use traits::{Device, Runtime, RuntimeClient};
