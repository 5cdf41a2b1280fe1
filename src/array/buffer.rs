//! Growable device memory

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::{Allocator, Runtime, RuntimeClient};

/// Smallest capacity a growing buffer allocates
const MIN_GROWTH_CAPACITY: usize = 8;

/// A growable block of device memory holding elements of one dtype
///
/// The buffer tracks a logical element count (`len`) separately from its
/// allocated `capacity`. Elements in `[0, len)` are always defined. Storage
/// is owned exclusively and released through the client's allocator on drop.
///
/// Every fallible operation leaves the buffer unchanged on error.
pub struct DeviceBuffer<R: Runtime> {
    /// Raw device pointer (GPU address or CPU ptr cast to u64), 0 when capacity is 0
    ptr: u64,
    /// Number of defined elements
    len: usize,
    /// Number of allocated elements
    capacity: usize,
    dtype: DType,
    device: R::Device,
    allocator: R::Allocator,
}

impl<R: Runtime> DeviceBuffer<R> {
    /// Create an empty buffer without allocating
    pub fn new(dtype: DType, client: &R::Client) -> Self {
        Self {
            ptr: 0,
            len: 0,
            capacity: 0,
            dtype,
            device: client.device().clone(),
            allocator: client.allocator().clone(),
        }
    }

    /// Create an empty buffer with room for `capacity` elements
    pub fn with_capacity(capacity: usize, dtype: DType, client: &R::Client) -> Result<Self> {
        let mut buffer = Self::new(dtype, client);
        buffer.grow_exact(capacity)?;
        Ok(buffer)
    }

    /// Create a buffer of `len` zeros
    pub fn zeroed(len: usize, dtype: DType, client: &R::Client) -> Result<Self> {
        let mut buffer = Self::with_capacity(len, dtype, client)?;
        R::zero_fill(buffer.ptr, buffer.bytes_for(len)?, &buffer.device)?;
        buffer.len = len;
        Ok(buffer)
    }

    /// Create a buffer of `len` elements that a kernel is about to overwrite
    ///
    /// The contents are unspecified until written. Only operation
    /// implementations that fill every element use this.
    pub(crate) fn for_output(len: usize, dtype: DType, client: &R::Client) -> Result<Self> {
        let mut buffer = Self::with_capacity(len, dtype, client)?;
        buffer.len = len;
        Ok(buffer)
    }

    /// Copy host data into a new buffer
    pub fn from_slice<T: Element>(data: &[T], client: &R::Client) -> Result<Self> {
        let mut buffer = Self::with_capacity(data.len(), T::DTYPE, client)?;
        R::copy_to_device(bytemuck::cast_slice(data), buffer.ptr, &buffer.device)?;
        buffer.len = data.len();
        Ok(buffer)
    }

    /// Get the raw device pointer
    #[inline]
    pub fn ptr(&self) -> u64 {
        self.ptr
    }

    /// Number of defined elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the buffer holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current allocation holds
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Get the device
    #[inline]
    pub fn device(&self) -> &R::Device {
        &self.device
    }

    /// Size in bytes of the defined elements
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.len * self.dtype.size_in_bytes()
    }

    fn bytes_for(&self, elements: usize) -> Result<usize> {
        self.dtype
            .checked_bytes(elements)
            .ok_or(Error::OutOfMemory { size: usize::MAX })
    }

    #[inline]
    fn element_ptr(&self, index: usize) -> u64 {
        self.ptr + (index * self.dtype.size_in_bytes()) as u64
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.len,
            });
        }
        Ok(())
    }

    fn check_dtype<T: Element>(&self) -> Result<()> {
        if T::DTYPE != self.dtype {
            return Err(Error::DTypeMismatch {
                lhs: self.dtype,
                rhs: T::DTYPE,
            });
        }
        Ok(())
    }

    /// Move the defined elements into a fresh allocation of `new_capacity`
    fn grow_exact(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity {
            return Ok(());
        }
        let new_bytes = self.bytes_for(new_capacity)?;
        let new_ptr = self.allocator.allocate(new_bytes)?;
        if self.len > 0 {
            let copied = R::copy_within_device(self.ptr, new_ptr, self.size_in_bytes(), &self.device);
            if let Err(e) = copied {
                self.allocator.deallocate(new_ptr, new_bytes);
                return Err(e);
            }
        }
        log::debug!(
            "{} buffer grow: {} -> {} elements ({})",
            R::name(),
            self.capacity,
            new_capacity,
            self.dtype
        );
        self.release();
        self.ptr = new_ptr;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Ensure room for `required` elements, growing geometrically
    fn grow_for(&mut self, required: usize) -> Result<()> {
        if required <= self.capacity {
            return Ok(());
        }
        let doubled = self.capacity.saturating_mul(2);
        self.grow_exact(required.max(doubled).max(MIN_GROWTH_CAPACITY))
    }

    /// Ensure capacity for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::OutOfMemory { size: usize::MAX })?;
        self.grow_for(required)
    }

    /// Append one value, converted to the buffer's dtype
    pub fn push(&mut self, value: f64) -> Result<()> {
        self.grow_for(self.len + 1)?;
        self.write_scalar(self.len, value)?;
        self.len += 1;
        Ok(())
    }

    /// Append host values with a single host-to-device copy
    pub fn extend_from_slice<T: Element>(&mut self, values: &[T]) -> Result<()> {
        self.check_dtype::<T>()?;
        if values.is_empty() {
            return Ok(());
        }
        self.reserve(values.len())?;
        R::copy_to_device(
            bytemuck::cast_slice(values),
            self.element_ptr(self.len),
            &self.device,
        )?;
        self.len += values.len();
        Ok(())
    }

    /// Set the element count
    ///
    /// Growing zero-fills the newly exposed elements; shrinking keeps the
    /// capacity.
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        if new_len > self.len {
            self.grow_for(new_len)?;
            let exposed = self.bytes_for(new_len - self.len)?;
            R::zero_fill(self.element_ptr(self.len), exposed, &self.device)?;
        }
        self.len = new_len;
        Ok(())
    }

    /// Drop all elements, keeping the allocation
    pub fn clear(&mut self) {
        self.len = 0;
    }

    fn write_scalar(&mut self, index: usize, value: f64) -> Result<()> {
        let dst = self.element_ptr(index);
        match self.dtype {
            DType::F64 => R::copy_to_device(bytemuck::bytes_of(&value), dst, &self.device),
            DType::F32 => {
                let v = value as f32;
                R::copy_to_device(bytemuck::bytes_of(&v), dst, &self.device)
            }
        }
    }

    /// Read the element at `index` (one device-to-host transfer)
    pub fn get(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        let src = self.element_ptr(index);
        match self.dtype {
            DType::F64 => {
                let mut v = 0.0f64;
                R::copy_from_device(src, bytemuck::bytes_of_mut(&mut v), &self.device)?;
                Ok(v)
            }
            DType::F32 => {
                let mut v = 0.0f32;
                R::copy_from_device(src, bytemuck::bytes_of_mut(&mut v), &self.device)?;
                Ok(v as f64)
            }
        }
    }

    /// Overwrite the element at `index` (one host-to-device transfer)
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_index(index)?;
        self.write_scalar(index, value)
    }

    /// Copy `dst.len()` elements starting at `start` to the host
    pub fn read_range<T: Element>(&self, start: usize, dst: &mut [T]) -> Result<()> {
        self.check_dtype::<T>()?;
        let end = start.saturating_add(dst.len());
        if end > self.len {
            return Err(Error::IndexOutOfBounds {
                index: end - 1,
                size: self.len,
            });
        }
        if dst.is_empty() {
            return Ok(());
        }
        R::copy_from_device(
            self.element_ptr(start),
            bytemuck::cast_slice_mut(dst),
            &self.device,
        )
    }

    /// Copy every defined element to the host
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        self.check_dtype::<T>()?;
        let mut out = vec![T::zero(); self.len];
        self.read_range(0, &mut out)?;
        Ok(out)
    }

    /// Deep copy: a new allocation sized to `len` with the same contents
    pub fn try_clone(&self) -> Result<Self> {
        let mut out = Self {
            ptr: 0,
            len: 0,
            capacity: 0,
            dtype: self.dtype,
            device: self.device.clone(),
            allocator: self.allocator.clone(),
        };
        out.grow_exact(self.len)?;
        if self.len > 0 {
            R::copy_within_device(self.ptr, out.ptr, self.size_in_bytes(), &self.device)?;
        }
        out.len = self.len;
        Ok(out)
    }

    fn release(&mut self) {
        if self.ptr != 0 {
            let bytes = self.capacity * self.dtype.size_in_bytes();
            self.allocator.deallocate(self.ptr, bytes);
        }
        self.ptr = 0;
        self.capacity = 0;
    }
}

impl<R: Runtime> Drop for DeviceBuffer<R> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<R: Runtime> std::fmt::Debug for DeviceBuffer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceBuffer")
            .field("ptr", &format_args!("{:#x}", self.ptr))
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("dtype", &self.dtype)
            .field("device", &self.device)
            .finish()
    }
}
