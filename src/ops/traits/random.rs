//! Random generation trait.

use crate::array::StatArray;
use crate::dtype::DType;
use crate::error::Result;
use crate::runtime::Runtime;

/// Random array generation
///
/// Every call draws a fresh seed from the client's
/// [`SeedSequence`](crate::runtime::SeedSequence), so output is reproducible
/// for a client built with a fixed `RuntimeConfig::seed` and never repeats
/// between calls.
pub trait RandomOps<R: Runtime> {
    /// `count` independent standard-normal draws (mean 0, variance 1)
    ///
    /// # Example
    ///
    /// ```
    /// # use statarray::prelude::*;
    /// let client = CpuRuntime::create_client(&RuntimeConfig::new().with_seed(7))?;
    /// let x = client.randn(1000, DType::F64)?;
    /// assert_eq!(x.len(), 1000);
    /// # Ok::<(), statarray::error::Error>(())
    /// ```
    fn randn(&self, count: usize, dtype: DType) -> Result<StatArray<R>>;
}
