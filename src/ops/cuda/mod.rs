//! CUDA implementations of the operation traits.

mod binary;
mod random;
mod reduce;
mod scalar;
mod sorting;
mod statistics;
mod utility;
