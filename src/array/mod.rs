//! Device-resident arrays
//!
//! [`DeviceBuffer`] manages a growable block of device memory;
//! [`StatArray`] wraps it with a client, a diagnostic name, and a sortedness
//! marker, and exposes every operation as a method.

mod buffer;
mod core;

pub use buffer::DeviceBuffer;
pub use core::{SortOrder, StatArray};
