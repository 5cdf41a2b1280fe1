//! Polynomials with device-resident coefficients

use crate::array::StatArray;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::ops::BinaryOps;
use crate::runtime::Runtime;
use std::fmt;

/// A polynomial `c[0] + c[1] x + ... + c[d] x^d` with degree bound `d`
///
/// Exactly `degree + 1` coefficients are stored on the device, lowest power
/// first; coefficients not supplied at construction are zero.
///
/// # Example
///
/// ```
/// # use statarray::prelude::*;
/// # let client = CpuRuntime::create_client(&RuntimeConfig::default())?;
/// let p = Polynomial::<CpuRuntime>::new(&client, 2, &[1.0f64, 2.0, 3.0])?;
/// let q = Polynomial::<CpuRuntime>::new(&client, 4, &[-1.0f64, -2.0, -4.0])?;
/// let sum = p.add(&q)?;
/// assert_eq!(sum.degree(), 4);
/// assert_eq!(sum.coefficients()?, vec![0.0, 0.0, -1.0, 0.0, 0.0]);
/// # Ok::<(), statarray::error::Error>(())
/// ```
#[derive(Debug)]
pub struct Polynomial<R: Runtime> {
    degree: usize,
    coefficients: StatArray<R>,
}

fn coefficient_count(degree: usize) -> Result<usize> {
    degree
        .checked_add(1)
        .ok_or_else(|| Error::invalid_argument("degree", "degree bound overflows"))
}

impl<R: Runtime> Polynomial<R> {
    /// Create a polynomial of degree bound `degree`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if more than `degree + 1` coefficients are
    /// given.
    pub fn new<T: Element>(client: &R::Client, degree: usize, coefficients: &[T]) -> Result<Self> {
        let size = coefficient_count(degree)?;
        if coefficients.len() > size {
            return Err(Error::invalid_argument(
                "coefficients",
                format!(
                    "{} coefficients exceed degree bound {degree}",
                    coefficients.len()
                ),
            ));
        }
        let mut array = StatArray::<R>::empty(client, T::DTYPE);
        array.reserve(size)?;
        array.extend_from_slice(coefficients)?;
        array.resize(size)?;
        Ok(Self {
            degree,
            coefficients: array,
        })
    }

    /// The zero polynomial of degree bound `degree`
    pub fn zero(client: &R::Client, degree: usize, dtype: DType) -> Result<Self> {
        let mut array = StatArray::<R>::empty(client, dtype);
        array.resize(coefficient_count(degree)?)?;
        Ok(Self {
            degree,
            coefficients: array,
        })
    }

    /// Degree bound
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Coefficient dtype
    pub fn dtype(&self) -> DType {
        self.coefficients.dtype()
    }

    /// Coefficient of `x^power`; zero above the degree bound
    pub fn coefficient(&self, power: usize) -> Result<f64> {
        if power > self.degree {
            return Ok(0.0);
        }
        self.coefficients.get(power)
    }

    /// All `degree + 1` coefficients as `f64`, lowest power first
    pub fn coefficients(&self) -> Result<Vec<f64>> {
        self.coefficients.to_f64_vec()
    }

    /// Coefficient storage
    pub fn as_array(&self) -> &StatArray<R> {
        &self.coefficients
    }

    fn padded_to(&self, degree: usize) -> Result<StatArray<R>> {
        let mut array = self.coefficients.try_clone()?;
        array.resize(degree + 1)?;
        Ok(array)
    }

    /// Coefficient-wise sum up to the larger degree bound
    ///
    /// # Errors
    ///
    /// Returns `DTypeMismatch` if the coefficient dtypes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let degree = self.degree.max(other.degree);
        let lhs = self.padded_to(degree)?;
        let rhs = other.padded_to(degree)?;
        let coefficients = lhs.client().add(&lhs, &rhs)?;
        Ok(Self {
            degree,
            coefficients,
        })
    }

    /// Evaluate at `x` on the host (Horner's rule)
    pub fn eval(&self, x: f64) -> Result<f64> {
        let coefficients = self.coefficients()?;
        Ok(coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c))
    }
}

impl<R: Runtime> fmt::Display for Polynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficients = self.coefficients().map_err(|_| fmt::Error)?;
        let mut first = true;
        for (power, c) in coefficients.iter().enumerate() {
            if *c == 0.0 {
                continue;
            }
            let c = if first {
                *c
            } else if *c < 0.0 {
                write!(f, " - ")?;
                -*c
            } else {
                write!(f, " + ")?;
                *c
            };
            first = false;
            match power {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}x")?,
                _ => write!(f, "{c}x^{power}")?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
