//! CPU implementation of order statistics.

use crate::array::StatArray;
use crate::error::Result;
use crate::ops::impl_generic::{
    iqr_impl, lower_quartile_impl, median_impl, quantile_impl, quartiles_impl,
    upper_quartile_impl, winsorize_impl,
};
use crate::ops::{Quartiles, StatisticalOps};
use crate::runtime::cpu::{CpuClient, CpuRuntime};

/// StatisticalOps implementation for CPU runtime.
impl StatisticalOps<CpuRuntime> for CpuClient {
    fn median(&self, a: &StatArray<CpuRuntime>) -> Result<f64> {
        median_impl(self, a)
    }

    fn lower_quartile(&self, a: &StatArray<CpuRuntime>) -> Result<f64> {
        lower_quartile_impl(self, a)
    }

    fn upper_quartile(&self, a: &StatArray<CpuRuntime>) -> Result<f64> {
        upper_quartile_impl(self, a)
    }

    fn iqr(&self, a: &StatArray<CpuRuntime>) -> Result<f64> {
        iqr_impl(self, a)
    }

    fn quartiles(&self, a: &StatArray<CpuRuntime>) -> Result<Quartiles> {
        quartiles_impl(self, a)
    }

    fn quantile(&self, a: &StatArray<CpuRuntime>, q: f64) -> Result<f64> {
        quantile_impl(self, a, q)
    }

    fn winsorize(&self, a: &StatArray<CpuRuntime>, fraction: f64) -> Result<StatArray<CpuRuntime>> {
        winsorize_impl(self, a, fraction)
    }
}
