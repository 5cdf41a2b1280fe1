//! CPU runtime implementation

use super::client::{CpuAllocator, CpuClient};
use super::device::CpuDevice;
use crate::error::{Error, Result};
use crate::runtime::{Runtime, RuntimeConfig};
use std::alloc::{Layout as AllocLayout, alloc_zeroed, dealloc};

/// AVX-512 alignment
const ALIGN: usize = 64;

/// CPU compute runtime
///
/// This is the default runtime that works on any platform.
/// Memory is allocated on the heap using the system allocator.
#[derive(Clone, Debug, Default)]
pub struct CpuRuntime;

impl CpuRuntime {
    pub(crate) fn alloc_host(size_bytes: usize) -> Result<u64> {
        if size_bytes == 0 {
            return Ok(0);
        }

        let layout = AllocLayout::from_size_align(size_bytes, ALIGN)
            .map_err(|_| Error::OutOfMemory { size: size_bytes })?;

        let ptr = unsafe { alloc_zeroed(layout) };

        if ptr.is_null() {
            return Err(Error::OutOfMemory { size: size_bytes });
        }

        Ok(ptr as u64)
    }

    pub(crate) fn dealloc_host(ptr: u64, size_bytes: usize) {
        if ptr == 0 || size_bytes == 0 {
            return;
        }

        // Every live pointer came from `alloc_host` with this exact layout
        if let Ok(layout) = AllocLayout::from_size_align(size_bytes, ALIGN) {
            unsafe {
                dealloc(ptr as *mut u8, layout);
            }
        }
    }
}

impl Runtime for CpuRuntime {
    type Device = CpuDevice;
    type Client = CpuClient;
    type Allocator = CpuAllocator;

    fn name() -> &'static str {
        "cpu"
    }

    fn allocate(size_bytes: usize, _device: &Self::Device) -> Result<u64> {
        Self::alloc_host(size_bytes)
    }

    fn deallocate(ptr: u64, size_bytes: usize, _device: &Self::Device) {
        Self::dealloc_host(ptr, size_bytes)
    }

    fn copy_to_device(src: &[u8], dst: u64, _device: &Self::Device) -> Result<()> {
        if src.is_empty() || dst == 0 {
            return Ok(());
        }

        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), dst as *mut u8, src.len());
        }
        Ok(())
    }

    fn copy_from_device(src: u64, dst: &mut [u8], _device: &Self::Device) -> Result<()> {
        if dst.is_empty() || src == 0 {
            return Ok(());
        }

        unsafe {
            std::ptr::copy_nonoverlapping(src as *const u8, dst.as_mut_ptr(), dst.len());
        }
        Ok(())
    }

    fn copy_within_device(
        src: u64,
        dst: u64,
        size_bytes: usize,
        _device: &Self::Device,
    ) -> Result<()> {
        if size_bytes == 0 || src == 0 || dst == 0 {
            return Ok(());
        }

        unsafe {
            // Use copy (not copy_nonoverlapping) in case src and dst overlap
            std::ptr::copy(src as *const u8, dst as *mut u8, size_bytes);
        }
        Ok(())
    }

    fn zero_fill(dst: u64, size_bytes: usize, _device: &Self::Device) -> Result<()> {
        if size_bytes == 0 || dst == 0 {
            return Ok(());
        }

        unsafe {
            std::ptr::write_bytes(dst as *mut u8, 0, size_bytes);
        }
        Ok(())
    }

    fn device(index: usize) -> Result<Self::Device> {
        if index != 0 {
            return Err(Error::DeviceUnavailable {
                device: format!("cpu:{index}"),
                reason: "the host backend has a single device, index 0".to_string(),
            });
        }
        Ok(CpuDevice::new())
    }

    fn default_device() -> Self::Device {
        CpuDevice::new()
    }

    fn create_client(config: &RuntimeConfig) -> Result<Self::Client> {
        let device = Self::device(config.device_index)?;
        let client = CpuClient::new(device)
            .with_memory_limit(config.memory_limit)
            .with_seed(config.seed)
            .with_parallelism(config.parallelism);
        log::debug!(
            "cpu client created: memory_limit={:?}, threads={:?}, min_chunk_len={}",
            config.memory_limit,
            config.parallelism.max_threads,
            config.parallelism.min_chunk_len
        );
        Ok(client)
    }
}
