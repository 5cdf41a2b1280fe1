//! Global per-device context and stream cache for the CUDA runtime

use super::device::CudaDevice;
use crate::error::{Error, Result};
use cudarc::driver::safe::{CudaContext, CudaStream};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// Context and stream shared by every client of one device
///
/// All allocations, copies, and kernel launches for a device go through this
/// one stream, so they execute in submission order.
#[derive(Clone)]
pub(crate) struct DeviceStream {
    pub(crate) context: Arc<CudaContext>,
    pub(crate) stream: Arc<CudaStream>,
}

impl DeviceStream {
    fn create(device: &CudaDevice) -> Result<Self> {
        let unavailable = |e: cudarc::driver::DriverError| Error::DeviceUnavailable {
            device: format!("cuda:{}", device.index),
            reason: e.to_string(),
        };
        let context = CudaContext::new(device.index).map_err(unavailable)?;
        context.bind_to_thread().map_err(unavailable)?;
        let stream = context.new_stream().map_err(unavailable)?;
        log::debug!("cuda:{}: context and stream created", device.index);
        Ok(Self { context, stream })
    }

    /// Make this device's context current on the calling thread
    pub(crate) fn bind(&self) -> Result<()> {
        self.context.bind_to_thread()?;
        Ok(())
    }

    /// Raw stream handle for driver calls
    #[inline]
    pub(crate) fn cu_stream(&self) -> cudarc::driver::sys::CUstream {
        self.stream.cu_stream()
    }
}

/// Global cache: device index -> shared context and stream
static STREAM_CACHE: OnceLock<Mutex<HashMap<usize, DeviceStream>>> = OnceLock::new();

/// Check if the CUDA context on the current thread is valid.
///
/// # Safety
///
/// This function calls CUDA driver API directly. It is safe to call at any time
/// but the result is only valid for the current thread's context state.
#[inline]
pub(super) unsafe fn is_cuda_context_valid() -> bool {
    let mut ctx: cudarc::driver::sys::CUcontext = std::ptr::null_mut();
    // SAFETY: cuCtxGetCurrent is safe to call at any time and writes to the provided pointer.
    let result = unsafe { cudarc::driver::sys::cuCtxGetCurrent(&mut ctx) };
    result == cudarc::driver::sys::CUresult::CUDA_SUCCESS && !ctx.is_null()
}

/// Lock the cache, recovering from a poisoned mutex.
///
/// Cache entries are inserted whole, so a panic while holding the lock
/// cannot leave a half-written entry.
#[inline]
fn lock_stream_cache(
    cache: &Mutex<HashMap<usize, DeviceStream>>,
) -> MutexGuard<'_, HashMap<usize, DeviceStream>> {
    cache.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Get or create the shared context and stream for a device, bound to the
/// calling thread.
pub(crate) fn get_or_create_stream(device: &CudaDevice) -> Result<DeviceStream> {
    let cache = STREAM_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = lock_stream_cache(cache);

    if let Some(shared) = guard.get(&device.index) {
        let shared = shared.clone();
        drop(guard);
        shared.bind()?;
        return Ok(shared);
    }

    let shared = DeviceStream::create(device)?;
    guard.insert(device.index, shared.clone());
    Ok(shared)
}

/// Try to get the cached stream for a device.
///
/// Returns `None` if the device was never initialized.
#[inline]
pub(super) fn try_get_cached_stream(device_index: usize) -> Option<cudarc::driver::sys::CUstream> {
    let cache = STREAM_CACHE.get()?;
    let guard = lock_stream_cache(cache);
    guard.get(&device_index).map(DeviceStream::cu_stream)
}

/// Log a CUDA memory operation failure.
#[cold]
#[inline(never)]
pub(super) fn log_cuda_memory_error(
    operation: &str,
    ptr: u64,
    result: cudarc::driver::sys::CUresult,
) {
    log::error!("cuda: {operation} failed for ptr 0x{ptr:x}: {result:?}");
}
