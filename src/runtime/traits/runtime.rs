//! Core trait for compute backends

use crate::error::Result;
use crate::ops::ArrayOps;
use crate::runtime::RuntimeConfig;

/// Core trait for compute backends
///
/// `Runtime` abstracts over different compute devices (CPU, GPU).
/// It uses static dispatch via generics for zero-cost abstraction.
///
/// # Associated Types
///
/// - `Device`: Identifies a specific compute unit (e.g., GPU 0, GPU 1)
/// - `Client`: Handles operation dispatch and synchronization, and implements
///   every operation trait through [`ArrayOps`]
/// - `Allocator`: Memory management with byte tracking
///
/// # Example
///
/// ```ignore
/// let device = CpuRuntime::default_device();
/// let ptr = CpuRuntime::allocate(1024, &device)?;
/// // ... use memory ...
/// CpuRuntime::deallocate(ptr, 1024, &device);
/// ```
pub trait Runtime: Clone + Send + Sync + 'static {
    /// Device identifier type
    type Device: super::Device;

    /// Client for dispatching operations
    type Client: super::RuntimeClient<Self> + ArrayOps<Self>;

    /// Memory allocator type
    type Allocator: crate::runtime::Allocator;

    /// Human-readable name of this runtime
    fn name() -> &'static str;

    /// Allocate device memory
    ///
    /// Returns a device pointer (u64) that can be used for operations.
    /// Returns `Err(OutOfMemory)` if allocation fails.
    fn allocate(size_bytes: usize, device: &Self::Device) -> Result<u64>;

    /// Deallocate device memory
    fn deallocate(ptr: u64, size_bytes: usize, device: &Self::Device);

    /// Copy data from host to device
    fn copy_to_device(src: &[u8], dst: u64, device: &Self::Device) -> Result<()>;

    /// Copy data from device to host
    fn copy_from_device(src: u64, dst: &mut [u8], device: &Self::Device) -> Result<()>;

    /// Copy data within device (device to device)
    fn copy_within_device(src: u64, dst: u64, size_bytes: usize, device: &Self::Device)
    -> Result<()>;

    /// Set `size_bytes` bytes starting at `dst` to zero
    fn zero_fill(dst: u64, size_bytes: usize, device: &Self::Device) -> Result<()>;

    /// Look up a device by index
    ///
    /// Returns `Err(DeviceUnavailable)` if the index does not name a usable device.
    fn device(index: usize) -> Result<Self::Device>;

    /// Get the default device
    fn default_device() -> Self::Device;

    /// Build a client for the device selected by `config`
    ///
    /// This is the single entry point for device selection and initialization.
    fn create_client(config: &RuntimeConfig) -> Result<Self::Client>;
}
