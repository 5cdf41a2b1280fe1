//! Order statistics composed from sorting, clamping, and element access
//!
//! Every statistic reads the ascending order of its input. An array already
//! marked sorted is read in place (at mirrored indices when descending);
//! otherwise one sorted copy is made on the device. Only the elements a
//! statistic needs cross to the host.

use crate::array::{SortOrder, StatArray};
use crate::error::{Error, Result};
use crate::ops::{Quartiles, ScalarOps, SortDirection, SortingOps};
use crate::runtime::Runtime;

/// Ascending-order access to an array's values
enum SortedValues<'a, R: Runtime> {
    /// The input itself, already sorted
    Marked {
        array: &'a StatArray<R>,
        descending: bool,
    },
    /// A sorted copy
    Owned(StatArray<R>),
}

impl<'a, R: Runtime> SortedValues<'a, R> {
    fn new<C: SortingOps<R>>(client: &C, a: &'a StatArray<R>, op: &'static str) -> Result<Self> {
        if a.is_empty() {
            return Err(Error::EmptyArray { op });
        }
        Ok(match a.sort_order() {
            SortOrder::Ascending => Self::Marked {
                array: a,
                descending: false,
            },
            SortOrder::Descending => Self::Marked {
                array: a,
                descending: true,
            },
            SortOrder::Unsorted => Self::Owned(client.sort(a, SortDirection::Ascending)?),
        })
    }

    fn len(&self) -> usize {
        match self {
            Self::Marked { array, .. } => array.len(),
            Self::Owned(array) => array.len(),
        }
    }

    /// The `i`-th smallest value
    fn at(&self, i: usize) -> Result<f64> {
        match self {
            Self::Marked {
                array,
                descending: false,
            } => array.get(i),
            Self::Marked {
                array,
                descending: true,
            } => array.get(array.len() - 1 - i),
            Self::Owned(array) => array.get(i),
        }
    }

    /// Number of non-NaN values; NaN sorts after every number
    fn numeric_len(&self) -> Result<usize> {
        let (mut lo, mut hi) = (0, self.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.at(mid)?.is_nan() {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        Ok(lo)
    }

    /// Median of the sorted run `[start, start + len)`
    fn median_of(&self, start: usize, len: usize) -> Result<f64> {
        let mid = start + len / 2;
        if len % 2 == 1 {
            self.at(mid)
        } else {
            Ok((self.at(mid - 1)? + self.at(mid)?) / 2.0)
        }
    }

    fn median(&self) -> Result<f64> {
        self.median_of(0, self.len())
    }

    /// Median of `s[0..n/2]`; the single element when `n == 1`
    fn lower_quartile(&self) -> Result<f64> {
        let n = self.len();
        if n == 1 {
            return self.at(0);
        }
        self.median_of(0, n / 2)
    }

    /// Median of `s[n - n/2..n]`; the single element when `n == 1`
    fn upper_quartile(&self) -> Result<f64> {
        let n = self.len();
        if n == 1 {
            return self.at(0);
        }
        let half = n / 2;
        self.median_of(n - half, half)
    }
}

/// Median of an array
pub fn median_impl<R, C>(client: &C, a: &StatArray<R>) -> Result<f64>
where
    R: Runtime,
    C: SortingOps<R>,
{
    SortedValues::new(client, a, "median")?.median()
}

/// Lower quartile (median of the lower half)
pub fn lower_quartile_impl<R, C>(client: &C, a: &StatArray<R>) -> Result<f64>
where
    R: Runtime,
    C: SortingOps<R>,
{
    SortedValues::new(client, a, "lquart")?.lower_quartile()
}

/// Upper quartile (median of the upper half)
pub fn upper_quartile_impl<R, C>(client: &C, a: &StatArray<R>) -> Result<f64>
where
    R: Runtime,
    C: SortingOps<R>,
{
    SortedValues::new(client, a, "uquart")?.upper_quartile()
}

/// Interquartile range from a single sort
pub fn iqr_impl<R, C>(client: &C, a: &StatArray<R>) -> Result<f64>
where
    R: Runtime,
    C: SortingOps<R>,
{
    let sorted = SortedValues::new(client, a, "iqr")?;
    Ok(sorted.upper_quartile()? - sorted.lower_quartile()?)
}

/// Lower quartile, median, and upper quartile from a single sort
pub fn quartiles_impl<R, C>(client: &C, a: &StatArray<R>) -> Result<Quartiles>
where
    R: Runtime,
    C: SortingOps<R>,
{
    let sorted = SortedValues::new(client, a, "quartiles")?;
    Ok(Quartiles {
        lower: sorted.lower_quartile()?,
        median: sorted.median()?,
        upper: sorted.upper_quartile()?,
    })
}

/// Quantile `q` by linear interpolation at position `q * (n - 1)`
pub fn quantile_impl<R, C>(client: &C, a: &StatArray<R>, q: f64) -> Result<f64>
where
    R: Runtime,
    C: SortingOps<R>,
{
    if !(0.0..=1.0).contains(&q) {
        return Err(Error::invalid_argument(
            "q",
            format!("quantile must be in [0, 1], got {q}"),
        ));
    }
    let sorted = SortedValues::new(client, a, "quantile")?;
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let lo_val = sorted.at(lo)?;
    if lo == hi {
        return Ok(lo_val);
    }
    let hi_val = sorted.at(hi)?;
    Ok(lo_val + (hi_val - lo_val) * (pos - lo as f64))
}

/// Winsorized copy: clamp into `[s[k], s[m-1-k]]` with `k = floor(fraction * m)`
/// over the `m` non-NaN values
pub fn winsorize_impl<R, C>(client: &C, a: &StatArray<R>, fraction: f64) -> Result<StatArray<R>>
where
    R: Runtime,
    C: SortingOps<R> + ScalarOps<R>,
{
    if !(0.0..0.5).contains(&fraction) {
        return Err(Error::invalid_argument(
            "fraction",
            format!("winsorizing fraction must be in [0, 0.5), got {fraction}"),
        ));
    }
    // The numeric count is at most `len`, so this k bounds the final one
    if (fraction * a.len() as f64).floor() < 1.0 {
        return a.try_clone();
    }

    let sorted = SortedValues::new(client, a, "winsorize")?;
    let m = sorted.numeric_len()?;
    let k = (fraction * m as f64).floor() as usize;
    if k == 0 {
        return a.try_clone();
    }
    let lo = sorted.at(k)?;
    let hi = sorted.at(m - 1 - k)?;

    let mut out = client.clamp(a, lo, hi)?;
    // Clamping is monotone, so a sorted input stays sorted
    out.set_sort_order(a.sort_order());
    Ok(out)
}
