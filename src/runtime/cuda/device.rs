//! CUDA Device implementation
//!
//! Provides CUDA device abstraction using cudarc for direct GPU control.

use crate::error::{Error, Result};
use crate::runtime::Device;

/// CUDA Device using cudarc
///
/// Represents a single GPU by ordinal. The context and stream for a device
/// live in the runtime's per-device cache and are shared by every client.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CudaDevice {
    /// Index of the GPU device (0, 1, 2, ...)
    pub(crate) index: usize,
}

impl CudaDevice {
    /// Create a new CUDA device handle
    ///
    /// No driver call is made; use [`crate::runtime::Runtime::device`] to
    /// obtain a handle that is known to be usable.
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Get memory information for this device
    ///
    /// Returns (free_bytes, total_bytes) for the device's global memory.
    /// The device's context must be current on the calling thread.
    pub fn memory_info(&self) -> Result<(u64, u64)> {
        let (free, total) = cudarc::driver::result::mem_get_info().map_err(|e| {
            Error::Backend(format!(
                "failed to query memory of cuda:{}: {e}",
                self.index
            ))
        })?;
        Ok((free as u64, total as u64))
    }
}

impl Device for CudaDevice {
    fn id(&self) -> usize {
        self.index
    }

    fn name(&self) -> String {
        format!("cuda:{}", self.index)
    }
}

impl Default for CudaDevice {
    fn default() -> Self {
        Self::new(0)
    }
}
