//! CPU client and allocator implementation

use super::device::CpuDevice;
use super::runtime::CpuRuntime;
use crate::runtime::{DefaultAllocator, ParallelismConfig, RuntimeClient, SeedSequence};
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// CPU client for operation dispatch
///
/// Cloning is cheap: clones share the allocator statistics, seed sequence,
/// and thread pool.
#[derive(Clone, Debug)]
pub struct CpuClient {
    pub(crate) device: CpuDevice,
    allocator: CpuAllocator,
    seeds: SeedSequence,
    parallelism: ParallelismConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CpuClient {
    /// Create a new CPU client with default settings
    pub fn new(device: CpuDevice) -> Self {
        let allocator = create_cpu_allocator(device.clone());
        Self {
            device,
            allocator,
            seeds: SeedSequence::new(None),
            parallelism: ParallelismConfig::default(),
            #[cfg(feature = "rayon")]
            pool: None,
        }
    }

    /// Cap the live bytes this client may allocate
    pub fn with_memory_limit(mut self, limit: Option<usize>) -> Self {
        self.allocator = create_cpu_allocator(self.device.clone()).with_limit(limit);
        self
    }

    /// Restart the seed sequence from `seed` (`None` = OS entropy)
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seeds = SeedSequence::new(seed);
        self
    }

    /// Apply host parallelism settings
    ///
    /// With `max_threads` set, the client gets a dedicated rayon pool of that
    /// size. If the pool cannot be built, the global pool is used instead.
    /// A `min_chunk_len` of zero is raised to one.
    pub fn with_parallelism(mut self, parallelism: ParallelismConfig) -> Self {
        let parallelism = ParallelismConfig::new(
            parallelism.max_threads,
            Some(parallelism.min_chunk_len),
        );
        self.parallelism = parallelism;
        #[cfg(feature = "rayon")]
        {
            self.pool = parallelism.max_threads.and_then(|threads| {
                match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                    Ok(pool) => Some(Arc::new(pool)),
                    Err(e) => {
                        log::warn!("cpu: cannot build {threads}-thread pool, using global pool: {e}");
                        None
                    }
                }
            });
        }
        self
    }

    /// Current parallelism settings
    pub fn parallelism(&self) -> ParallelismConfig {
        self.parallelism
    }

    /// Minimum elements per parallel task
    #[inline]
    pub(crate) fn rayon_min_len(&self) -> usize {
        self.parallelism.min_chunk_len
    }

    /// Run `f` on this client's thread pool
    pub(crate) fn install_parallelism<T, F>(&self, f: F) -> T
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        #[cfg(feature = "rayon")]
        if let Some(pool) = &self.pool {
            return pool.install(f);
        }
        f()
    }
}

impl RuntimeClient<CpuRuntime> for CpuClient {
    fn device(&self) -> &CpuDevice {
        &self.device
    }

    fn synchronize(&self) {
        // CPU operations are synchronous, nothing to do
    }

    fn allocator(&self) -> &CpuAllocator {
        &self.allocator
    }

    fn seeds(&self) -> &SeedSequence {
        &self.seeds
    }
}

/// CPU-specific allocator type alias
pub type CpuAllocator = DefaultAllocator<CpuDevice>;

/// Create a CPU allocator for the given device
fn create_cpu_allocator(device: CpuDevice) -> CpuAllocator {
    DefaultAllocator::new(
        device,
        |size, _dev| CpuRuntime::alloc_host(size),
        |ptr, size, _dev| CpuRuntime::dealloc_host(ptr, size),
    )
}
