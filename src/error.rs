//! Error types for statarray

use crate::dtype::DType;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using statarray's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in statarray operations
#[derive(Error, Debug)]
pub enum Error {
    /// Vector-vector operation on arrays of different length
    #[error("Shape mismatch in '{op}': lhs has {lhs} elements, rhs has {rhs}")]
    ShapeMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side element count
        lhs: usize,
        /// Right-hand side element count
        rhs: usize,
    },

    /// DType mismatch between operands
    #[error("DType mismatch: {lhs:?} vs {rhs:?}")]
    DTypeMismatch {
        /// Left-hand side dtype
        lhs: DType,
        /// Right-hand side dtype
        rhs: DType,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for array of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Logical size of the array
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Operation is undefined on an empty array
    #[error("Operation '{op}' requires a non-empty array")]
    EmptyArray {
        /// The operation name
        op: &'static str,
    },

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes (`usize::MAX` when the size overflowed)
        size: usize,
    },

    /// File could not be opened, read, or written
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content
    #[error("Format error in '{}' at line {line}: cannot parse {content:?}", path.display())]
    Format {
        /// Path of the file being read
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Offending line content
        content: String,
    },

    /// Device could not be selected or initialized
    #[error("Device {device} unavailable: {reason}")]
    DeviceUnavailable {
        /// Device description (e.g. "cuda:1")
        device: String,
        /// Backend-specific reason, including driver error codes
        reason: String,
    },

    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),

    /// CUDA driver error
    #[cfg(feature = "cuda")]
    #[error("CUDA error: {0}")]
    Cuda(#[from] cudarc::driver::DriverError),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(op: &'static str, lhs: usize, rhs: usize) -> Self {
        Self::ShapeMismatch { op, lhs, rhs }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create an I/O error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is an allocation failure the caller may retry with less data
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}
