//! Core StatArray type

use super::DeviceBuffer;
use crate::dispatch_dtype;
use crate::dtype::{DType, Element};
use crate::error::Result;
use crate::ops::{
    BinaryOps, Quartiles, ReduceOps, ScalarOps, SortDirection, SortingOps, StatisticalOps,
};
use crate::runtime::Runtime;
use std::fmt;

/// Number of leading and trailing elements `Display` prints
const DISPLAY_EDGE: usize = 3;

/// Sortedness marker carried by every array
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// No known order
    #[default]
    Unsorted,
    /// Sorted smallest first
    Ascending,
    /// Sorted largest first
    Descending,
}

impl SortOrder {
    /// The direction this marker records, if any
    pub fn direction(self) -> Option<SortDirection> {
        match self {
            Self::Unsorted => None,
            Self::Ascending => Some(SortDirection::Ascending),
            Self::Descending => Some(SortDirection::Descending),
        }
    }
}

impl From<SortDirection> for SortOrder {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => Self::Ascending,
            SortDirection::Descending => Self::Descending,
        }
    }
}

/// A one-dimensional array of floating point values stored on a device
///
/// `StatArray` is the main data structure of statarray. It owns a
/// [`DeviceBuffer`] exclusively, so no two arrays share storage; use
/// [`try_clone`](Self::try_clone) for a deep device-to-device copy. Storage
/// is freed when the array is dropped.
///
/// Arithmetic methods return new arrays and never modify their operands.
/// [`sort`](Self::sort) is the only in-place reordering.
///
/// # Example
///
/// ```
/// use statarray::prelude::*;
///
/// let client = CpuRuntime::create_client(&RuntimeConfig::default())?;
/// let mut a = StatArray::<CpuRuntime>::new(&client, "a", DType::F64);
/// for v in [4.0, 1.0, 3.0, 2.0] {
///     a.push(v)?;
/// }
/// assert_eq!(a.mean()?, 2.5);
/// assert_eq!(a.median()?, 2.5);
/// assert_eq!(a.to_string(), "a = [4, 1, 3, 2]");
/// # Ok::<(), statarray::error::Error>(())
/// ```
pub struct StatArray<R: Runtime> {
    buffer: DeviceBuffer<R>,
    client: R::Client,
    name: Option<String>,
    order: SortOrder,
}

impl<R: Runtime> StatArray<R> {
    // ===== Constructors =====

    /// Create an empty named array
    pub fn new(client: &R::Client, name: impl Into<String>, dtype: DType) -> Self {
        Self::empty(client, dtype).with_name(name)
    }

    /// Create an empty unnamed array
    pub fn empty(client: &R::Client, dtype: DType) -> Self {
        Self::from_buffer(DeviceBuffer::new(dtype, client), client)
    }

    /// Copy host data into a new array; the dtype follows `T`
    pub fn from_slice<T: Element>(client: &R::Client, data: &[T]) -> Result<Self> {
        Ok(Self::from_buffer(DeviceBuffer::from_slice(data, client)?, client))
    }

    /// Wrap a buffer produced by an operation
    pub fn from_buffer(buffer: DeviceBuffer<R>, client: &R::Client) -> Self {
        Self {
            buffer,
            client: client.clone(),
            name: None,
            order: SortOrder::Unsorted,
        }
    }

    /// Deep copy on the device, keeping name and sortedness
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            buffer: self.buffer.try_clone()?,
            client: self.client.clone(),
            name: self.name.clone(),
            order: self.order,
        })
    }

    // ===== Accessors =====

    /// Set the diagnostic name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set or replace the diagnostic name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Diagnostic name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the array holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Allocated capacity in elements
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.buffer.dtype()
    }

    /// Client this array dispatches operations through
    #[inline]
    pub fn client(&self) -> &R::Client {
        &self.client
    }

    /// Underlying device buffer
    #[inline]
    pub fn buffer(&self) -> &DeviceBuffer<R> {
        &self.buffer
    }

    #[inline]
    pub(crate) fn buffer_mut(&mut self) -> &mut DeviceBuffer<R> {
        &mut self.buffer
    }

    /// Current sortedness marker
    #[inline]
    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    pub(crate) fn set_sort_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    // ===== Mutation =====

    /// Append one value
    pub fn push(&mut self, value: f64) -> Result<()> {
        self.buffer.push(value)?;
        self.order = SortOrder::Unsorted;
        Ok(())
    }

    /// Append host values; `T` must match the array's dtype
    pub fn extend_from_slice<T: Element>(&mut self, values: &[T]) -> Result<()> {
        self.buffer.extend_from_slice(values)?;
        self.order = SortOrder::Unsorted;
        Ok(())
    }

    /// Ensure capacity for `additional` more elements
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.buffer.reserve(additional)
    }

    /// Set the element count; new elements are zero
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        self.buffer.resize(new_len)?;
        self.order = SortOrder::Unsorted;
        Ok(())
    }

    /// Remove every element, keeping capacity
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.order = SortOrder::Unsorted;
    }

    /// Overwrite the element at `index`
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        self.buffer.set(index, value)?;
        self.order = SortOrder::Unsorted;
        Ok(())
    }

    // ===== Host access =====

    /// Read the element at `index`
    ///
    /// Each call is one device-to-host transfer; use [`to_vec`](Self::to_vec)
    /// for bulk reads.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.buffer.get(index)
    }

    /// Copy all elements to the host; `T` must match the dtype
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        self.buffer.to_vec()
    }

    /// Copy all elements to the host as `f64`
    pub fn to_f64_vec(&self) -> Result<Vec<f64>> {
        dispatch_dtype!(self.dtype(), T => {
            let values: Vec<T> = self.buffer.to_vec()?;
            Ok(values.into_iter().map(Element::to_f64).collect())
        })
    }

    // ===== Element-wise arithmetic =====

    /// `self[i] + other[i]`
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.client.add(self, other)
    }

    /// `self[i] - other[i]`
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.client.sub(self, other)
    }

    /// `self[i] * other[i]`
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.client.mul(self, other)
    }

    /// `self[i] / other[i]`
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.client.div(self, other)
    }

    /// `self[i] ^ other[i]`
    pub fn pow(&self, other: &Self) -> Result<Self> {
        self.client.pow(self, other)
    }

    /// `self[i] + s`
    pub fn add_scalar(&self, s: f64) -> Result<Self> {
        self.client.add_scalar(self, s)
    }

    /// `self[i] - s`
    pub fn sub_scalar(&self, s: f64) -> Result<Self> {
        self.client.sub_scalar(self, s)
    }

    /// `self[i] * s`
    pub fn mul_scalar(&self, s: f64) -> Result<Self> {
        self.client.mul_scalar(self, s)
    }

    /// `self[i] / s`
    pub fn div_scalar(&self, s: f64) -> Result<Self> {
        self.client.div_scalar(self, s)
    }

    /// `self[i] ^ s`
    pub fn pow_scalar(&self, s: f64) -> Result<Self> {
        self.client.pow_scalar(self, s)
    }

    /// `s - self[i]`
    pub fn scalar_sub(&self, s: f64) -> Result<Self> {
        self.client.rsub_scalar(self, s)
    }

    /// `s / self[i]`
    pub fn scalar_div(&self, s: f64) -> Result<Self> {
        self.client.rdiv_scalar(self, s)
    }

    /// `s ^ self[i]`
    pub fn scalar_pow(&self, s: f64) -> Result<Self> {
        self.client.rpow_scalar(self, s)
    }

    /// Clamp every element into `[lo, hi]`
    pub fn clamp(&self, lo: f64, hi: f64) -> Result<Self> {
        ScalarOps::clamp(&self.client, self, lo, hi)
    }

    // ===== Reductions =====

    /// Sum of all elements (0 for an empty array)
    pub fn sum(&self) -> Result<f64> {
        self.client.sum(self)
    }

    /// Arithmetic mean; fails on an empty array
    pub fn mean(&self) -> Result<f64> {
        self.client.mean(self)
    }

    /// Smallest element
    pub fn min(&self) -> Result<f64> {
        ReduceOps::min(&self.client, self)
    }

    /// Largest element
    pub fn max(&self) -> Result<f64> {
        ReduceOps::max(&self.client, self)
    }

    /// Variance with `ddof` delta degrees of freedom
    pub fn variance(&self, ddof: usize) -> Result<f64> {
        self.client.variance(self, ddof)
    }

    /// Standard deviation with `ddof` delta degrees of freedom
    pub fn std_dev(&self, ddof: usize) -> Result<f64> {
        self.client.std_dev(self, ddof)
    }

    // ===== Order statistics =====

    /// Sort ascending in place
    pub fn sort(&mut self) -> Result<()> {
        let client = self.client.clone();
        client.sort_in_place(self, SortDirection::Ascending)
    }

    /// Sorted copy in `direction`
    pub fn sorted(&self, direction: SortDirection) -> Result<Self> {
        self.client.sort(self, direction)
    }

    /// Median
    pub fn median(&self) -> Result<f64> {
        self.client.median(self)
    }

    /// Lower quartile (median of the lower half)
    pub fn lquart(&self) -> Result<f64> {
        self.client.lower_quartile(self)
    }

    /// Upper quartile (median of the upper half)
    pub fn uquart(&self) -> Result<f64> {
        self.client.upper_quartile(self)
    }

    /// Interquartile range
    pub fn iqr(&self) -> Result<f64> {
        self.client.iqr(self)
    }

    /// Lower quartile, median, and upper quartile from one sort
    pub fn quartiles(&self) -> Result<Quartiles> {
        self.client.quartiles(self)
    }

    /// Linearly interpolated quantile `q` in `[0, 1]`
    pub fn quantile(&self, q: f64) -> Result<f64> {
        self.client.quantile(self, q)
    }

    /// Copy with both tails clamped at the `fraction` quantile boundaries
    pub fn winsorized(&self, fraction: f64) -> Result<Self> {
        self.client.winsorize(self, fraction)
    }
}

impl<R: Runtime> fmt::Debug for StatArray<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatArray")
            .field("name", &self.name)
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("dtype", &self.dtype())
            .field("order", &self.order)
            .finish()
    }
}

impl<R: Runtime> fmt::Display for StatArray<R> {
    /// Prints `name = [a, b, c, ..., x, y, z]`
    ///
    /// Only the printed elements are transferred from the device.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name} = ")?;
        }
        let n = self.len();
        let indices: Vec<Option<usize>> = if n <= 2 * DISPLAY_EDGE {
            (0..n).map(Some).collect()
        } else {
            (0..DISPLAY_EDGE)
                .map(Some)
                .chain(std::iter::once(None))
                .chain((n - DISPLAY_EDGE..n).map(Some))
                .collect()
        };

        write!(f, "[")?;
        for (pos, index) in indices.iter().enumerate() {
            if pos > 0 {
                write!(f, ", ")?;
            }
            match index {
                Some(i) => {
                    let v = self.get(*i).map_err(|_| fmt::Error)?;
                    match self.dtype() {
                        DType::F64 => write!(f, "{v}")?,
                        DType::F32 => write!(f, "{}", v as f32)?,
                    }
                }
                None => write!(f, "...")?,
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RuntimeConfig;
    use crate::runtime::cpu::{CpuClient, CpuRuntime};

    fn client() -> CpuClient {
        CpuRuntime::create_client(&RuntimeConfig::new().with_seed(1)).unwrap()
    }

    #[test]
    fn test_display_truncates_long_arrays() {
        let client = client();
        let data: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        let a = StatArray::<CpuRuntime>::from_slice(&client, &data)
            .unwrap()
            .with_name("x");
        assert_eq!(a.to_string(), "x = [1, 2, 3, ..., 8, 9, 10]");

        let short = StatArray::<CpuRuntime>::from_slice(&client, &[0.5f32, 1.5]).unwrap();
        assert_eq!(short.to_string(), "[0.5, 1.5]");

        let empty = StatArray::<CpuRuntime>::new(&client, "e", DType::F64);
        assert_eq!(empty.to_string(), "e = []");
    }

    #[test]
    fn test_mutation_resets_sort_marker() {
        let client = client();
        let mut a = StatArray::<CpuRuntime>::from_slice(&client, &[3.0f64, 1.0, 2.0]).unwrap();
        a.sort().unwrap();
        assert_eq!(a.sort_order(), SortOrder::Ascending);

        let copy = a.try_clone().unwrap();
        assert_eq!(copy.sort_order(), SortOrder::Ascending);

        a.push(0.0).unwrap();
        assert_eq!(a.sort_order(), SortOrder::Unsorted);
        a.sort().unwrap();
        a.set(0, 10.0).unwrap();
        assert_eq!(a.sort_order(), SortOrder::Unsorted);
    }

    #[test]
    fn test_arithmetic_result_is_unsorted() {
        let client = client();
        let mut a = StatArray::<CpuRuntime>::from_slice(&client, &[1.0f64, 2.0]).unwrap();
        a.sort().unwrap();
        let b = a.mul_scalar(-1.0).unwrap();
        assert_eq!(b.sort_order(), SortOrder::Unsorted);
    }

    #[test]
    fn test_to_f64_vec_widens_f32() {
        let client = client();
        let a = StatArray::<CpuRuntime>::from_slice(&client, &[1.5f32, -2.0]).unwrap();
        assert_eq!(a.to_f64_vec().unwrap(), vec![1.5, -2.0]);
        assert!(a.to_vec::<f64>().is_err());
    }
}
