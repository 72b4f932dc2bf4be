//! XorShift Random Core - Rust Engine
//!
//! Fast, reproducible, non-cryptographic random number generation.
//!
//! # Architecture
//!
//! - **rng**: xorshift128 generator, splitmix64 seed expansion, the
//!   [`RandomSource`] capability trait and seed sources
//! - **config**: serde-backed generator configuration
//! - **compat**: `rand_core` interop (feature `rand_core`)
//! - **ffi**: Python bindings (feature `pyo3`)
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, on every platform
//! 2. Generator state is never all zero
//! 3. Failed argument validation never advances the generator

// Module declarations
pub mod config;
pub mod rng;

#[cfg(feature = "rand_core")]
pub mod compat;

// Re-exports for convenience
pub use config::{ConfigError, GeneratorConfig};
pub use rng::{
    EntropySeedSource, RandomError, RandomSource, SeedSource, XorShift128, XorShiftState,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn xorshift_random_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyXorShiftRandom>()?;
    Ok(())
}
