//! Trait for runtime clients that handle operation dispatch

use super::Runtime;
use crate::runtime::SeedSequence;

/// Trait for runtime clients that handle operation dispatch
///
/// A client is cheap to clone; clones share the allocator statistics and the
/// seed sequence of the client they were cloned from.
pub trait RuntimeClient<R: Runtime>: Clone + Send + Sync {
    /// Get the device this client operates on
    fn device(&self) -> &R::Device;

    /// Synchronize: wait for all pending operations to complete
    fn synchronize(&self);

    /// Get the allocator for this client
    fn allocator(&self) -> &R::Allocator;

    /// Seed sequence feeding the random generators
    fn seeds(&self) -> &SeedSequence;
}
