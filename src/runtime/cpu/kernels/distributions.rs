//! Distribution sampling kernels for CPU
//!
//! Output is split into chunks of `min_len` elements. Chunk `c` draws from
//! its own `StdRng` seeded with `splitmix64(seed + c)`, so results depend
//! only on the seed and chunk length, never on thread scheduling.

use crate::dtype::Element;
use crate::runtime::splitmix64;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

fn fill_standard_normal<T: Element>(chunk: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for elem in chunk.iter_mut() {
        let val: f64 = StandardNormal.sample(&mut rng);
        *elem = T::from_f64(val);
    }
}

/// Sample from the standard normal distribution
///
/// # Safety
/// - `out` must be a valid, non-null pointer to `len` elements
#[inline]
pub unsafe fn randn_kernel<T: Element>(out: *mut T, len: usize, seed: u64, min_len: usize) {
    let out_slice = std::slice::from_raw_parts_mut(out, len);
    let chunk_seed = |c: usize| splitmix64(seed.wrapping_add(c as u64));

    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        out_slice
            .par_chunks_mut(min_len)
            .enumerate()
            .for_each(|(c, chunk)| fill_standard_normal(chunk, chunk_seed(c)));
    }
    #[cfg(not(feature = "rayon"))]
    for (c, chunk) in out_slice.chunks_mut(min_len).enumerate() {
        fill_standard_normal(chunk, chunk_seed(c));
    }
}
