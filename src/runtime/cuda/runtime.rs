//! CUDA runtime implementation

use super::cache::{
    get_or_create_stream, is_cuda_context_valid, log_cuda_memory_error, try_get_cached_stream,
};
use super::client::{CudaAllocator, CudaClient};
use super::device::CudaDevice;
use crate::error::{Error, Result};
use crate::runtime::{Runtime, RuntimeConfig};
use cudarc::driver::sys::{self, CUresult};

/// CUDA Runtime adapter
///
/// Implements the generic Runtime trait for the CUDA backend.
/// Uses cudarc for direct GPU control.
#[derive(Clone, Debug, Default)]
pub struct CudaRuntime;

fn check(result: CUresult, what: impl FnOnce() -> String) -> Result<()> {
    if result == CUresult::CUDA_SUCCESS {
        Ok(())
    } else {
        Err(Error::Backend(format!("cuda: {} ({result:?})", what())))
    }
}

impl Runtime for CudaRuntime {
    type Device = CudaDevice;
    type Client = CudaClient;
    type Allocator = CudaAllocator;

    fn name() -> &'static str {
        "cuda"
    }

    /// Allocate GPU memory.
    ///
    /// Returns `Err(OutOfMemory)` if CUDA memory allocation fails.
    fn allocate(size_bytes: usize, device: &Self::Device) -> Result<u64> {
        if size_bytes == 0 {
            return Ok(0);
        }

        let shared = get_or_create_stream(device)?;

        unsafe {
            let mut ptr: u64 = 0;
            let result = sys::cuMemAllocAsync(&mut ptr, size_bytes, shared.cu_stream());
            if result == CUresult::CUDA_SUCCESS {
                return Ok(ptr);
            }

            // Pending frees are returned to the pool once the stream drains
            let _ = shared.stream.synchronize();

            let result = sys::cuMemAllocAsync(&mut ptr, size_bytes, shared.cu_stream());
            if result == CUresult::CUDA_SUCCESS {
                return Ok(ptr);
            }
            let free = shared
                .stream
                .context()
                .bind_to_thread()
                .ok()
                .and_then(|_| device.memory_info().ok())
                .map(|(free, _)| free);
            log::debug!(
                "cuda:{}: allocation of {size_bytes} bytes failed: {result:?} (free bytes: {free:?})",
                device.index
            );
        }

        Err(Error::OutOfMemory { size: size_bytes })
    }

    fn deallocate(ptr: u64, _size_bytes: usize, device: &Self::Device) {
        if ptr == 0 {
            return;
        }

        unsafe {
            // Memory of a destroyed context is reclaimed by the driver
            if !is_cuda_context_valid() {
                return;
            }

            let result = if let Some(stream) = try_get_cached_stream(device.index) {
                sys::cuMemFreeAsync(ptr, stream)
            } else {
                sys::cuMemFree_v2(ptr)
            };

            if result != CUresult::CUDA_SUCCESS
                && result != CUresult::CUDA_ERROR_ILLEGAL_ADDRESS
            {
                log_cuda_memory_error("cuMemFree", ptr, result);
            }
        }
    }

    /// Copy data from host to device.
    ///
    /// Synchronizes the stream before returning.
    fn copy_to_device(src: &[u8], dst: u64, device: &Self::Device) -> Result<()> {
        if src.is_empty() || dst == 0 {
            return Ok(());
        }

        let shared = get_or_create_stream(device)?;

        unsafe {
            let result = sys::cuMemcpyHtoDAsync_v2(
                dst,
                src.as_ptr() as *const std::ffi::c_void,
                src.len(),
                shared.cu_stream(),
            );
            check(result, || {
                format!("host-to-device copy of {} bytes failed", src.len())
            })?;
        }

        // The host slice may be dropped as soon as we return
        shared.stream.synchronize()?;
        Ok(())
    }

    /// Copy data from device to host.
    ///
    /// Synchronizes the stream before returning.
    fn copy_from_device(src: u64, dst: &mut [u8], device: &Self::Device) -> Result<()> {
        if dst.is_empty() || src == 0 {
            return Ok(());
        }

        let shared = get_or_create_stream(device)?;

        unsafe {
            let result = sys::cuMemcpyDtoHAsync_v2(
                dst.as_mut_ptr() as *mut std::ffi::c_void,
                src,
                dst.len(),
                shared.cu_stream(),
            );
            check(result, || {
                format!("device-to-host copy of {} bytes failed", dst.len())
            })?;
        }

        shared.stream.synchronize()?;
        Ok(())
    }

    /// Copy data within device memory, ordered on the device's stream.
    fn copy_within_device(
        src: u64,
        dst: u64,
        size_bytes: usize,
        device: &Self::Device,
    ) -> Result<()> {
        if size_bytes == 0 || src == 0 || dst == 0 {
            return Ok(());
        }

        let shared = get_or_create_stream(device)?;

        unsafe {
            let result = sys::cuMemcpyDtoDAsync_v2(dst, src, size_bytes, shared.cu_stream());
            check(result, || {
                format!("device-to-device copy of {size_bytes} bytes failed")
            })
        }
    }

    fn zero_fill(dst: u64, size_bytes: usize, device: &Self::Device) -> Result<()> {
        if size_bytes == 0 || dst == 0 {
            return Ok(());
        }

        let shared = get_or_create_stream(device)?;

        unsafe {
            let result = sys::cuMemsetD8Async(dst, 0, size_bytes, shared.cu_stream());
            check(result, || format!("memset of {size_bytes} bytes failed"))
        }
    }

    /// Look up a GPU by ordinal and initialize its context.
    fn device(index: usize) -> Result<Self::Device> {
        let name = format!("cuda:{index}");
        let unavailable = |reason: String| Error::DeviceUnavailable {
            device: name.clone(),
            reason,
        };

        cudarc::driver::result::init().map_err(|e| unavailable(e.to_string()))?;
        let count = cudarc::driver::result::device::get_count()
            .map_err(|e| unavailable(e.to_string()))?;
        if index >= count as usize {
            return Err(unavailable(format!("{count} CUDA device(s) present")));
        }

        let device = CudaDevice::new(index);
        get_or_create_stream(&device)?;
        Ok(device)
    }

    fn default_device() -> Self::Device {
        CudaDevice::new(0)
    }

    fn create_client(config: &RuntimeConfig) -> Result<Self::Client> {
        let device = Self::device(config.device_index)?;
        let client = CudaClient::new(device)?
            .with_memory_limit(config.memory_limit)
            .with_seed(config.seed);
        log::debug!(
            "cuda client created: device={}, memory_limit={:?}",
            config.device_index,
            config.memory_limit
        );
        Ok(client)
    }
}

/// Check if a usable CUDA device 0 is present on this system
pub fn is_cuda_available() -> bool {
    CudaRuntime::device(0).is_ok()
}
