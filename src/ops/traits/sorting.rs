//! Sorting operations trait.

use crate::array::StatArray;
use crate::error::Result;
use crate::runtime::Runtime;

/// Requested sort direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first; NaN last
    #[default]
    Ascending,
    /// Largest first; NaN first (exact reverse of ascending)
    Descending,
}

/// Sorting operations trait
///
/// Ascending order places NaN after every number. Descending order is the
/// exact reverse of ascending order. Stability is not guaranteed.
pub trait SortingOps<R: Runtime> {
    /// Sort `a` in place and mark it sorted in `direction`
    fn sort_in_place(&self, a: &mut StatArray<R>, direction: SortDirection) -> Result<()>;

    /// Return a sorted copy of `a`, leaving `a` unchanged
    ///
    /// # Example
    ///
    /// ```
    /// # use statarray::prelude::*;
    /// # let client = CpuRuntime::create_client(&RuntimeConfig::default())?;
    /// let a = StatArray::<CpuRuntime>::from_slice(&client, &[3.0f64, 1.0, 2.0])?;
    /// let sorted = client.sort(&a, SortDirection::Descending)?;
    /// assert_eq!(sorted.to_vec::<f64>()?, vec![3.0, 2.0, 1.0]);
    /// # Ok::<(), statarray::error::Error>(())
    /// ```
    fn sort(&self, a: &StatArray<R>, direction: SortDirection) -> Result<StatArray<R>> {
        let mut out = a.try_clone()?;
        self.sort_in_place(&mut out, direction)?;
        Ok(out)
    }
}
