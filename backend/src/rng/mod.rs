//! Deterministic random number generation
//!
//! Uses the xorshift128 algorithm, seeded through splitmix64, behind the
//! [`RandomSource`] capability trait.
//! CRITICAL: Same seed MUST produce the same sequence on every platform.

mod seed;
mod source;
mod splitmix;
mod xorshift;

pub use seed::{EntropySeedSource, SeedSource};
pub use source::{RandomError, RandomSource};
pub use xorshift::{XorShift128, XorShiftState};
