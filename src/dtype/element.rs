//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

/// Trait for types that can be elements of an array
///
/// This trait connects Rust's type system to the runtime dtype system.
/// It is implemented for `f32` and `f64`.
///
/// # Bounds
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck) for device copies
/// - `Add + Sub + Mul + Div` - Arithmetic operations (Output = Self)
/// - `PartialOrd` - Comparison for sorting and clamping
/// - `Display` - CSV and diagnostic output
pub trait Element:
    Copy
    + Clone
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialOrd
    + Debug
    + Display
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    fn from_f64(v: f64) -> Self;

    /// Zero value
    fn zero() -> Self;

    /// Quiet NaN, used as padding that sorts after every number
    fn nan() -> Self;

    /// Whether the value is NaN
    fn is_nan(self) -> bool;

    /// Raise to a power
    fn powf(self, exp: Self) -> Self;

    /// Parse from text
    fn parse_text(s: &str) -> Option<Self>;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn nan() -> Self {
        f64::NAN
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn powf(self, exp: Self) -> Self {
        f64::powf(self, exp)
    }

    fn parse_text(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn nan() -> Self {
        f32::NAN
    }

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    #[inline]
    fn powf(self, exp: Self) -> Self {
        f32::powf(self, exp)
    }

    fn parse_text(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}
