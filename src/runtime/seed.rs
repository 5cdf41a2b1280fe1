//! Seed sequence shared by a client's random generators

use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finalizer: a bijective 64-bit mix
#[inline]
pub fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Stream of per-call seeds
///
/// Every generator call draws a fresh seed, so two `randn` calls on the same
/// client never repeat values, while a fixed base seed makes the whole
/// sequence reproducible.
#[derive(Clone, Debug)]
pub struct SeedSequence {
    state: Arc<AtomicU64>,
}

impl SeedSequence {
    /// Create a sequence from a base seed, or from OS entropy when `None`
    pub fn new(seed: Option<u64>) -> Self {
        let base = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            state: Arc::new(AtomicU64::new(base)),
        }
    }

    /// Next seed in the sequence
    pub fn next_seed(&self) -> u64 {
        let s = self.state.fetch_add(GOLDEN_GAMMA, Ordering::Relaxed);
        splitmix64(s)
    }
}
