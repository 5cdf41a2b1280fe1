//! Memory allocator trait and default implementation
//!
//! The allocator sits between device buffers and the runtime's raw allocation
//! functions. It tracks live and peak bytes per client and enforces an
//! optional byte limit, so exhausting a budget surfaces as
//! [`Error::OutOfMemory`] instead of a driver failure or an OS kill.

use crate::error::{Error, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Memory allocator trait for runtime backends
pub trait Allocator: Clone + Send + Sync {
    /// Allocate memory of given size
    ///
    /// Returns a device pointer (u64), or `Err(OutOfMemory)`.
    /// A zero-byte request returns the null handle `0`.
    fn allocate(&self, size_bytes: usize) -> Result<u64>;

    /// Deallocate memory
    fn deallocate(&self, ptr: u64, size_bytes: usize);

    /// Get the total allocated bytes
    fn allocated_bytes(&self) -> usize {
        0 // Default: tracking not supported
    }

    /// Highest value `allocated_bytes` has reached
    fn peak_bytes(&self) -> usize {
        0
    }

    /// Configured byte limit, if any
    fn limit(&self) -> Option<usize> {
        None
    }
}

#[derive(Debug, Default)]
struct AllocatorStats {
    allocated: AtomicUsize,
    peak: AtomicUsize,
}

/// Default allocator that delegates to Runtime methods
///
/// Clones share their statistics, so every buffer created through one client
/// counts against the same limit.
#[derive(Clone, Debug)]
pub struct DefaultAllocator<D> {
    device: D,
    allocate_fn: fn(usize, &D) -> Result<u64>,
    deallocate_fn: fn(u64, usize, &D),
    limit: Option<usize>,
    stats: Arc<AllocatorStats>,
}

impl<D: Clone + Send + Sync> DefaultAllocator<D> {
    /// Create a new default allocator
    pub fn new(
        device: D,
        allocate_fn: fn(usize, &D) -> Result<u64>,
        deallocate_fn: fn(u64, usize, &D),
    ) -> Self {
        Self {
            device,
            allocate_fn,
            deallocate_fn,
            limit: None,
            stats: Arc::new(AllocatorStats::default()),
        }
    }

    /// Cap the live bytes this allocator (and its clones) may hand out
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Get the device this allocator is associated with
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Count `size_bytes` against the limit; returns the new live total
    fn reserve(&self, size_bytes: usize) -> Result<usize> {
        let previous = self.stats.allocated.fetch_add(size_bytes, Ordering::AcqRel);
        let total = previous.checked_add(size_bytes);
        match (total, self.limit) {
            (Some(total), None) => Ok(total),
            (Some(total), Some(limit)) if total <= limit => Ok(total),
            _ => {
                self.stats.allocated.fetch_sub(size_bytes, Ordering::AcqRel);
                Err(Error::OutOfMemory { size: size_bytes })
            }
        }
    }
}

impl<D: Clone + Send + Sync> Allocator for DefaultAllocator<D> {
    fn allocate(&self, size_bytes: usize) -> Result<u64> {
        if size_bytes == 0 {
            return Ok(0);
        }
        let total = self.reserve(size_bytes)?;
        match (self.allocate_fn)(size_bytes, &self.device) {
            Ok(ptr) => {
                self.stats.peak.fetch_max(total, Ordering::AcqRel);
                Ok(ptr)
            }
            Err(e) => {
                self.stats.allocated.fetch_sub(size_bytes, Ordering::AcqRel);
                Err(e)
            }
        }
    }

    fn deallocate(&self, ptr: u64, size_bytes: usize) {
        if ptr == 0 || size_bytes == 0 {
            return;
        }
        (self.deallocate_fn)(ptr, size_bytes, &self.device);
        self.stats.allocated.fetch_sub(size_bytes, Ordering::AcqRel);
    }

    fn allocated_bytes(&self) -> usize {
        self.stats.allocated.load(Ordering::Acquire)
    }

    fn peak_bytes(&self) -> usize {
        self.stats.peak.load(Ordering::Acquire)
    }

    fn limit(&self) -> Option<usize> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_alloc(size: usize, _dev: &()) -> Result<u64> {
        Ok(size as u64)
    }

    fn failing_alloc(size: usize, _dev: &()) -> Result<u64> {
        Err(Error::OutOfMemory { size })
    }

    fn fake_dealloc(_ptr: u64, _size: usize, _dev: &()) {}

    #[test]
    fn test_default_allocator_trait_bounds() {
        fn assert_allocator<A: Allocator>() {}
        assert_allocator::<DefaultAllocator<()>>();
    }

    #[test]
    fn test_tracks_live_and_peak_bytes() {
        let alloc = DefaultAllocator::new((), fake_alloc, fake_dealloc);
        let a = alloc.allocate(100).unwrap();
        let b = alloc.allocate(50).unwrap();
        assert_eq!(alloc.allocated_bytes(), 150);
        alloc.deallocate(a, 100);
        assert_eq!(alloc.allocated_bytes(), 50);
        assert_eq!(alloc.peak_bytes(), 150);
        alloc.deallocate(b, 50);
        assert_eq!(alloc.allocated_bytes(), 0);
    }

    #[test]
    fn test_limit_rejects_without_leaking_reservation() {
        let alloc = DefaultAllocator::new((), fake_alloc, fake_dealloc).with_limit(Some(64));
        let clone = alloc.clone();
        let _a = alloc.allocate(48).unwrap();
        let err = clone.allocate(32).unwrap_err();
        assert!(matches!(err, Error::OutOfMemory { size: 32 }));
        assert_eq!(alloc.allocated_bytes(), 48);
        assert!(clone.allocate(16).is_ok());
    }

    #[test]
    fn test_backend_failure_releases_reservation() {
        let alloc = DefaultAllocator::new((), failing_alloc, fake_dealloc);
        assert!(alloc.allocate(10).is_err());
        assert_eq!(alloc.allocated_bytes(), 0);
        assert_eq!(alloc.peak_bytes(), 0);
    }

    #[test]
    fn test_zero_size_is_null() {
        let alloc = DefaultAllocator::new((), fake_alloc, fake_dealloc).with_limit(Some(0));
        assert_eq!(alloc.allocate(0).unwrap(), 0);
    }
}
