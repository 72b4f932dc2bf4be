//! Seed sources
//!
//! A [`SeedSource`] supplies the 64-bit seed used when a generator is built
//! without an explicit one. [`EntropySeedSource`] is the process-wide
//! default: non-deterministic across runs, but distinct for every draw
//! within a run.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use super::splitmix::{mix64, GOLDEN_GAMMA};

/// Supplier of 64-bit seeds
///
/// Implemented for any `FnMut() -> u64`, which makes it easy to inject a
/// fixed or scripted seed:
///
/// ```
/// use xorshift_random_core_rs::{RandomSource, XorShift128};
///
/// let mut fixed = || 12345u64;
/// let mut a = XorShift128::from_seed_source(&mut fixed);
/// let mut b = XorShift128::with_seed(12345);
/// assert_eq!(a.next_u32(), b.next_u32());
/// ```
pub trait SeedSource {
    /// Produce the next seed
    fn next_seed(&mut self) -> u64;
}

impl<F: FnMut() -> u64> SeedSource for F {
    fn next_seed(&mut self) -> u64 {
        self()
    }
}

/// Per-process base value, drawn once
static PROCESS_BASE: OnceLock<u64> = OnceLock::new();

/// Number of seeds handed out so far in this process
static DRAW_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Process-wide entropy seed provider
///
/// Combines a per-process base (randomly keyed std hasher, wall clock,
/// process id) with a global draw counter and finalizes the result with the
/// splitmix64 mixer. Seeds are NOT suitable for cryptographic use.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropySeedSource;

impl EntropySeedSource {
    /// Handle onto the process-wide seed stream
    pub fn new() -> Self {
        Self
    }
}

impl SeedSource for EntropySeedSource {
    fn next_seed(&mut self) -> u64 {
        let base = *PROCESS_BASE.get_or_init(process_base);
        let draw = DRAW_COUNTER.fetch_add(1, Ordering::Relaxed);
        mix64(base.wrapping_add(draw.wrapping_mul(GOLDEN_GAMMA)))
    }
}

fn process_base() -> u64 {
    // RandomState is keyed from OS randomness once per process
    let mut hasher = RandomState::new().build_hasher();

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    nanos.hash(&mut hasher);
    std::process::id().hash(&mut hasher);

    hasher.finish()
}
