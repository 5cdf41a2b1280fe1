//! CUDA runtime implementation
//!
//! This module provides GPU acceleration via NVIDIA CUDA using cudarc.
//!
//! # Features
//!
//! - `CudaDevice` - Represents a CUDA GPU device
//! - `CudaClient` - Holds the device stream, allocator, and seed sequence
//! - `CudaRuntime` - Implements the generic Runtime trait
//!
//! Driver failures surface as errors: allocation failures as
//! `Error::OutOfMemory`, device selection failures as
//! `Error::DeviceUnavailable` carrying the driver's message.

mod cache;
mod client;
mod device;
pub(crate) mod helpers;
mod kernels;
mod runtime;

pub use client::{CudaAllocator, CudaClient};
pub use device::CudaDevice;
pub use runtime::{CudaRuntime, is_cuda_available};
