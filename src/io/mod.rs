//! Host serialization
//!
//! Arrays persist as CSV text: one value per line, no header, in storage
//! order. Values use Rust's shortest round-trip float formatting, so writing
//! and reading back reproduces every element bit for bit (including `NaN`,
//! `inf`, and `-inf`).

mod csv;

pub use csv::{read_values, write_values};
