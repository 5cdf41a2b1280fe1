//! CUDA kernel loading, caching, and launching infrastructure
//!
//! PTX files are compiled by `build.rs` using nvcc, loaded on first use, and
//! cached per device. Every kernel exists in an `_f32` and an `_f64` variant.

pub use cudarc::driver::safe::LaunchConfig;
use cudarc::driver::safe::{CudaContext, CudaFunction, CudaModule};
use cudarc::nvrtc::Ptx;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::dtype::DType;
use crate::error::{Error, Result};

/// Directory containing compiled PTX files (set by build.rs)
const KERNEL_DIR: &str = env!("CUDA_KERNEL_DIR");

fn load_ptx(name: &str) -> Ptx {
    let path = format!("{}/{}.ptx", KERNEL_DIR, name);
    Ptx::from_file(path)
}

/// Cache for loaded CUDA modules, keyed by (device_index, module_name)
static MODULE_CACHE: OnceLock<Mutex<HashMap<(usize, &'static str), Arc<CudaModule>>>> =
    OnceLock::new();

/// Get or load a CUDA module from PTX.
///
/// # Errors
///
/// Returns an error if the PTX file cannot be loaded or the module cannot be created.
pub fn get_or_load_module(
    context: &Arc<CudaContext>,
    device_index: usize,
    module_name: &'static str,
) -> Result<Arc<CudaModule>> {
    let cache = MODULE_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = cache.lock().map_err(|e| {
        Error::Internal(format!(
            "Failed to acquire module cache lock (Mutex poisoned): {}",
            e
        ))
    })?;

    let key = (device_index, module_name);
    if let Some(module) = guard.get(&key) {
        return Ok(module.clone());
    }

    let ptx = load_ptx(module_name);
    let module = context.load_module(ptx).map_err(|e| {
        Error::Internal(format!(
            "Failed to load CUDA module '{}': {:?}. \
             Ensure CUDA kernels were compiled correctly by build.rs.",
            module_name, e
        ))
    })?;
    log::debug!("cuda:{device_index}: loaded module '{module_name}'");

    guard.insert(key, module.clone());

    Ok(module)
}

/// Get a kernel function from a loaded module.
pub fn get_kernel_function(module: &Arc<CudaModule>, kernel_name: &str) -> Result<CudaFunction> {
    module.load_function(kernel_name).map_err(|e| {
        Error::Internal(format!(
            "Failed to get kernel '{}': {:?}. \
             Check that the kernel name matches the CUDA source.",
            kernel_name, e
        ))
    })
}

/// Load `{base}_{dtype}` from a module
pub fn load_kernel(
    context: &Arc<CudaContext>,
    device_index: usize,
    module_name: &'static str,
    base: &str,
    dtype: DType,
) -> Result<CudaFunction> {
    let module = get_or_load_module(context, device_index, module_name)?;
    get_kernel_function(&module, &kernel_name(base, dtype))
}

/// Block size for element-wise operations
pub const BLOCK_SIZE: u32 = 256;

/// Upper bound on blocks for grid-stride reductions
pub const MAX_REDUCE_BLOCKS: u32 = 1024;

/// 1D grid covering `numel` elements with `BLOCK_SIZE` threads per block.
#[inline]
pub fn elementwise_launch_config(numel: usize) -> LaunchConfig {
    let grid_size = (numel as u32).div_ceil(BLOCK_SIZE);
    launch_config((grid_size, 1, 1), (BLOCK_SIZE, 1, 1), 0)
}

/// Grid for a grid-stride reduction; returns the config and block count.
///
/// Each block writes one partial result.
#[inline]
pub fn reduce_launch_config(numel: usize) -> (LaunchConfig, u32) {
    let grid_size = (numel as u32).div_ceil(BLOCK_SIZE).clamp(1, MAX_REDUCE_BLOCKS);
    let cfg = launch_config((grid_size, 1, 1), (BLOCK_SIZE, 1, 1), 0);
    (cfg, grid_size)
}

/// Create a launch configuration from grid, block, and shared memory sizes.
#[inline]
pub fn launch_config(
    grid: (u32, u32, u32),
    block: (u32, u32, u32),
    shared_mem: u32,
) -> LaunchConfig {
    LaunchConfig {
        grid_dim: grid,
        block_dim: block,
        shared_mem_bytes: shared_mem,
    }
}

/// Module names (one PTX file each).
pub mod kernel_names {
    /// Vector-vector arithmetic
    pub const BINARY_MODULE: &str = "binary";
    /// Scalar broadcast and clamp
    pub const SCALAR_MODULE: &str = "scalar";
    /// Block-partial reductions (sum, min, max, squared deviations)
    pub const REDUCE_MODULE: &str = "reduce";
    /// Bitonic sort and reversal
    pub const SORT_MODULE: &str = "sort";
    /// Standard-normal sampling
    pub const DISTRIBUTIONS_MODULE: &str = "distributions";
    /// Ranges and constant fills
    pub const UTILITY_MODULE: &str = "utility";
}

/// Get the kernel name suffix for a given dtype.
pub fn dtype_suffix(dtype: DType) -> &'static str {
    match dtype {
        DType::F32 => "f32",
        DType::F64 => "f64",
    }
}

/// Generate a kernel name with dtype suffix.
///
/// ```ignore
/// let name = kernel_name("add", DType::F32); // "add_f32"
/// ```
#[inline]
pub fn kernel_name(base: &str, dtype: DType) -> String {
    format!("{}_{}", base, dtype_suffix(dtype))
}

/// Map a launch failure into a crate error
pub fn launch_error(module: &str, op: &str, e: cudarc::driver::DriverError) -> Error {
    Error::Internal(format!(
        "CUDA {} kernel '{}' launch failed: {:?}",
        module, op, e
    ))
}
