//! Explicit client configuration
//!
//! A [`RuntimeConfig`] replaces process-wide device selection: each client is
//! built from one, and tests can build as many independent clients as they
//! like.

use crate::error::{Error, Result};

/// Environment variable selecting the device index
pub const ENV_DEVICE: &str = "STATARRAY_DEVICE";
/// Environment variable fixing the generator seed
pub const ENV_SEED: &str = "STATARRAY_SEED";
/// Environment variable capping live device bytes
pub const ENV_MEMORY_LIMIT: &str = "STATARRAY_MEMORY_LIMIT";
/// Environment variable capping host worker threads
pub const ENV_THREADS: &str = "STATARRAY_THREADS";

/// Host parallelism settings
///
/// `max_threads` of `None` uses rayon's global pool; `Some(n)` builds a
/// dedicated pool of `n` threads for the client. `min_chunk_len` is the
/// smallest number of elements handed to one parallel task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelismConfig {
    /// Worker thread cap
    pub max_threads: Option<usize>,
    /// Minimum elements per parallel task
    pub min_chunk_len: usize,
}

impl ParallelismConfig {
    /// Default minimum elements per parallel task
    pub const DEFAULT_MIN_CHUNK_LEN: usize = 16 * 1024;

    /// Create a parallelism configuration
    pub fn new(max_threads: Option<usize>, min_chunk_len: Option<usize>) -> Self {
        Self {
            max_threads,
            min_chunk_len: min_chunk_len
                .unwrap_or(Self::DEFAULT_MIN_CHUNK_LEN)
                .max(1),
        }
    }
}

impl Default for ParallelismConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Configuration used to select and initialize a device
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Index of the device to run on
    pub device_index: usize,
    /// Base seed for random generators (`None` = OS entropy)
    pub seed: Option<u64>,
    /// Cap on live bytes allocated through the client (`None` = device limit)
    pub memory_limit: Option<usize>,
    /// Host parallelism
    pub parallelism: ParallelismConfig,
}

impl RuntimeConfig {
    /// Configuration for device 0 with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the device by index
    pub fn with_device(mut self, index: usize) -> Self {
        self.device_index = index;
        self
    }

    /// Fix the generator seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap live allocated bytes
    pub fn with_memory_limit(mut self, bytes: usize) -> Self {
        self.memory_limit = Some(bytes);
        self
    }

    /// Set host parallelism
    pub fn with_parallelism(mut self, parallelism: ParallelismConfig) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Build a configuration from `STATARRAY_*` environment variables
    ///
    /// Unset variables keep their defaults; malformed values are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = lookup(ENV_DEVICE) {
            config.device_index = parse_var(ENV_DEVICE, &v)?;
        }
        if let Some(v) = lookup(ENV_SEED) {
            config.seed = Some(parse_var(ENV_SEED, &v)?);
        }
        if let Some(v) = lookup(ENV_MEMORY_LIMIT) {
            config.memory_limit = Some(parse_var(ENV_MEMORY_LIMIT, &v)?);
        }
        if let Some(v) = lookup(ENV_THREADS) {
            let threads: usize = parse_var(ENV_THREADS, &v)?;
            if threads == 0 {
                return Err(Error::invalid_argument(
                    "STATARRAY_THREADS",
                    "thread count must be at least 1",
                ));
            }
            config.parallelism.max_threads = Some(threads);
        }
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::invalid_argument(key, format!("cannot parse {:?}", value)))
}
