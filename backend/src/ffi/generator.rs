//! PyO3 wrapper for XorShift128
//!
//! This module provides the Python interface to the Rust generator.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use super::types::{parse_generator_config, random_error_to_py};
use crate::rng::{RandomSource, XorShift128};

/// Python wrapper for the Rust xorshift128 generator
///
/// # Example (from Python)
///
/// ```python
/// from xorshift_random_core_rs import XorShiftRandom
///
/// rng = XorShiftRandom(12345)
/// rng.next_uint()        # 353605593
/// rng.next(1, 7)         # die roll in [1, 7)
/// rng.next_bytes(16)     # 16 reproducible bytes
/// ```
#[pyclass(name = "XorShiftRandom")]
pub struct PyXorShiftRandom {
    inner: XorShift128,
}

#[pymethods]
impl PyXorShiftRandom {
    /// Create a generator, seeded explicitly or from process entropy
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(seed) => XorShift128::with_seed(seed),
            None => XorShift128::new(),
        };
        PyXorShiftRandom { inner }
    }

    /// Create a generator from a config dict such as `{"seed": 42}`
    ///
    /// # Errors
    ///
    /// Raises ValueError on unknown keys or a seed outside `[0, 2^64)`.
    #[staticmethod]
    fn from_config(config: &Bound<'_, PyDict>) -> PyResult<Self> {
        let rust_config = parse_generator_config(config)?;
        Ok(PyXorShiftRandom {
            inner: rust_config.build(),
        })
    }

    /// Replace all state with the expansion of `seed`
    fn reseed(&mut self, seed: u64) {
        self.inner.reseed(seed);
    }

    /// Bounded integer, dispatching on argument count
    ///
    /// - `next()` → `[0, 2^31 - 1)`
    /// - `next(max)` → `[0, max)`, ValueError if `max < 0`
    /// - `next(min, max)` → `[min, max)`, ValueError if `min > max`
    #[pyo3(signature = (first=None, second=None))]
    fn next(&mut self, first: Option<i32>, second: Option<i32>) -> PyResult<i32> {
        match (first, second) {
            (None, None) => Ok(self.inner.next()),
            (Some(max_value), None) => self.inner.next_below(max_value).map_err(random_error_to_py),
            (Some(min_value), Some(max_value)) => self
                .inner
                .next_in_range(min_value, max_value)
                .map_err(random_error_to_py),
            (None, Some(_)) => Err(PyValueError::new_err(
                "next() needs the first bound whenever the second is given",
            )),
        }
    }

    /// Unit double in `[0, 1)`
    fn next_double(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// Unit double in `(0, 1)`, never exactly zero
    fn next_double_non_zero(&mut self) -> f64 {
        self.inner.next_f64_non_zero()
    }

    /// Unit float in `[0, 1)` with 24 bits of precision
    fn next_float(&mut self) -> f32 {
        self.inner.next_f32()
    }

    /// Raw 32-bit output
    fn next_uint(&mut self) -> u32 {
        self.inner.next_u32()
    }

    /// Non-negative int in `[0, 2^31 - 1]`
    fn next_int(&mut self) -> i32 {
        self.inner.next_i32()
    }

    /// Two raw outputs joined, first draw in the low word
    fn next_ulong(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Fair coin flip
    fn next_bool(&mut self) -> bool {
        self.inner.next_bool()
    }

    /// One byte from a single step
    fn next_byte(&mut self) -> u8 {
        self.inner.next_u8()
    }

    /// `length` random bytes, filled in place in the new `bytes` object
    fn next_bytes<'py>(&mut self, py: Python<'py>, length: usize) -> PyResult<Bound<'py, PyBytes>> {
        PyBytes::new_bound_with(py, length, |buffer| {
            self.inner.fill_bytes(buffer);
            Ok(())
        })
    }
}
