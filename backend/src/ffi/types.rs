//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, exceptions).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::GeneratorConfig;
use crate::rng::RandomError;

/// Extract an optional field from a Python dict.
///
/// Missing keys and explicit `None` both map to `Ok(None)`.
///
/// # Errors
/// Returns error only if type conversion fails (not if field is missing)
fn extract_optional<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

/// Convert a Python dict into a [`GeneratorConfig`]
///
/// # Errors
///
/// Raises ValueError if:
/// - `seed` is not an integer in `[0, 2^64)`
/// - Any key other than `seed` is present
pub fn parse_generator_config(config: &Bound<'_, PyDict>) -> PyResult<GeneratorConfig> {
    for key in config.keys() {
        let name: String = key.extract()?;
        if name != "seed" {
            return Err(PyValueError::new_err(format!(
                "Unknown generator config field '{}'",
                name
            )));
        }
    }

    let seed = extract_optional::<u64>(config, "seed")
        .map_err(|e| PyValueError::new_err(format!("Invalid 'seed': {}", e)))?;

    Ok(GeneratorConfig { seed })
}

/// Map a range-precondition failure onto Python's ValueError
pub fn random_error_to_py(err: RandomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
