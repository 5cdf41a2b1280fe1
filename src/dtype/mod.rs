//! Element types for statarray arrays
//!
//! Arrays hold IEEE floating point values. The element type is chosen when an
//! array is created and carried at runtime as a [`DType`], so one
//! `StatArray<R>` type covers both precisions.

mod element;

pub use element::Element;

use std::fmt;

/// Element type of an array
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    #[default]
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 => 8,
            Self::F32 => 4,
        }
    }

    /// Short name for display (e.g., "f32")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
        }
    }

    /// Byte size of `len` elements, or `None` if it overflows `usize`
    #[inline]
    pub const fn checked_bytes(self, len: usize) -> Option<usize> {
        len.checked_mul(self.size_in_bytes())
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(DType::F64.size_in_bytes(), 8);
        assert_eq!(DType::F32.size_in_bytes(), 4);
        assert_eq!(DType::F32.checked_bytes(3), Some(12));
        assert_eq!(DType::F64.checked_bytes(usize::MAX), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(DType::F32.to_string(), "f32");
        assert_eq!(DType::default(), DType::F64);
    }
}
