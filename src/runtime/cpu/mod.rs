//! CPU runtime implementation
//!
//! The CPU runtime uses 64-byte aligned heap allocation and rayon-parallel
//! kernels. It is always available and serves as the reference backend.
//!
//! Parallel kernels split work into chunks of at least
//! [`ParallelismConfig::min_chunk_len`](crate::runtime::ParallelismConfig)
//! elements and run on the client's dedicated pool when one is configured.

mod client;
mod device;
pub(crate) mod helpers;
pub(crate) mod kernels;
mod runtime;

pub use client::{CpuAllocator, CpuClient};
pub use device::CpuDevice;
pub use runtime::CpuRuntime;
