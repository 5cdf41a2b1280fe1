//! CUDA Client implementation
//!
//! `CudaClient` holds the device's shared context and stream for direct
//! cudarc access, plus its own allocator statistics and seed sequence.
//!
//! # Thread Safety
//!
//! `CudaClient` is `Clone` and can be shared across threads. The context and
//! stream are reference-counted and bound to the calling thread before each
//! driver call made through the runtime.

use cudarc::driver::safe::{CudaContext, CudaStream};
use std::sync::Arc;

use super::cache::get_or_create_stream;
use super::device::CudaDevice;
use super::runtime::CudaRuntime;
use crate::error::Result;
use crate::runtime::{DefaultAllocator, Runtime, RuntimeClient, SeedSequence};

/// CUDA-specific allocator type alias
///
/// Memory comes from stream-ordered `cuMemAllocAsync`; the wrapper adds
/// byte tracking and the client's memory limit.
pub type CudaAllocator = DefaultAllocator<CudaDevice>;

/// CUDA Runtime Client
///
/// All operations launch on `self.stream()`; work launched on other streams
/// is not ordered against it.
#[derive(Clone)]
pub struct CudaClient {
    /// GPU device index
    pub(crate) device: CudaDevice,

    /// CUDA context for this device
    pub(crate) context: Arc<CudaContext>,

    /// Stream on which all kernels launch
    pub(crate) stream: Arc<CudaStream>,

    /// Allocator for memory management
    pub(crate) allocator: CudaAllocator,

    seeds: SeedSequence,
}

impl std::fmt::Debug for CudaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CudaClient")
            .field("device", &self.device)
            .field("memory_limit", &crate::runtime::Allocator::limit(&self.allocator))
            .finish_non_exhaustive()
    }
}

impl CudaClient {
    /// Create a new CUDA client for a device.
    ///
    /// The device's context and stream are created on first use and shared
    /// with every other client of the same device.
    ///
    /// # Errors
    ///
    /// Returns `DeviceUnavailable` if the context or stream cannot be created.
    pub fn new(device: CudaDevice) -> Result<Self> {
        let shared = get_or_create_stream(&device)?;
        let allocator = create_cuda_allocator(device.clone());
        Ok(Self {
            device,
            context: shared.context,
            stream: shared.stream,
            allocator,
            seeds: SeedSequence::new(None),
        })
    }

    /// Cap the live bytes this client may allocate
    pub fn with_memory_limit(mut self, limit: Option<usize>) -> Self {
        self.allocator = create_cuda_allocator(self.device.clone()).with_limit(limit);
        self
    }

    /// Restart the seed sequence from `seed` (`None` = OS entropy)
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seeds = SeedSequence::new(seed);
        self
    }

    /// Get reference to the CUDA stream.
    #[inline]
    pub fn stream(&self) -> &CudaStream {
        &self.stream
    }

    /// Get reference to the CUDA context.
    #[inline]
    pub fn context(&self) -> &Arc<CudaContext> {
        &self.context
    }
}

impl RuntimeClient<CudaRuntime> for CudaClient {
    fn device(&self) -> &CudaDevice {
        &self.device
    }

    fn synchronize(&self) {
        if let Err(e) = self.stream.synchronize() {
            log::warn!("cuda:{}: stream synchronization failed: {e}", self.device.index);
        }
    }

    fn allocator(&self) -> &CudaAllocator {
        &self.allocator
    }

    fn seeds(&self) -> &SeedSequence {
        &self.seeds
    }
}

fn create_cuda_allocator(device: CudaDevice) -> CudaAllocator {
    DefaultAllocator::new(device, CudaRuntime::allocate, CudaRuntime::deallocate)
}
