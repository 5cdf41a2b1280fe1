//! Backend parity tests: CUDA results are checked against the CPU backend
//!
//! Each test computes a reference on the CPU client, repeats the operation on
//! CUDA device 0, and compares. Tests pass without running anything when no
//! CUDA device is present.
#![cfg(feature = "cuda")]

#[path = "../common/mod.rs"]
mod common;

mod helpers;

mod arithmetic;
mod buffer;
mod random;
mod reduce;
mod sort;
mod statistics;
