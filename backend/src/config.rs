//! Generator configuration
//!
//! A small serde-backed description of how to build a generator, so callers
//! can pin a seed in a JSON file instead of in code.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::rng::{EntropySeedSource, SeedSource, XorShift128};

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid generator config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How to seed a generator
///
/// # Example
/// ```
/// use xorshift_random_core_rs::{GeneratorConfig, RandomSource};
///
/// let config = GeneratorConfig::from_json(r#"{ "seed": 12345 }"#).unwrap();
/// let mut rng = config.build();
/// assert_eq!(rng.next_u32(), 353_605_593);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Explicit seed; `None` draws one from the default seed source
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Config pinned to `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Parse configuration from a JSON document
    ///
    /// # Errors
    /// [`ConfigError::Parse`] on malformed JSON, a seed outside `u64`, or an
    /// unknown field.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a generator, using the process-wide entropy source if unseeded
    pub fn build(&self) -> XorShift128 {
        self.build_with(&mut EntropySeedSource::new())
    }

    /// Build a generator, using `source` if unseeded
    ///
    /// `source` is not consulted when a seed is configured.
    pub fn build_with<S: SeedSource + ?Sized>(&self, source: &mut S) -> XorShift128 {
        match self.seed {
            Some(seed) => {
                debug!(seed, "building xorshift128 from configured seed");
                XorShift128::with_seed(seed)
            }
            None => XorShift128::from_seed_source(source),
        }
    }
}
