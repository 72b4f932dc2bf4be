//! splitmix64 seed expansion
//!
//! A fast, equidistributed 64-bit mixer. A raw seed used directly as
//! xorshift state would make the first outputs track the seed's low bits;
//! running it through splitmix64 decorrelates the two.
//!
//! Because splitmix64 visits every 64-bit value exactly once per period, two
//! consecutive zero outputs cannot happen. Drawing two outputs per seed
//! therefore never yields the all-zero xorshift state.

/// Weyl-sequence increment (odd, ~2^64 / golden ratio)
pub(crate) const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// splitmix64 mixing accumulator
#[derive(Debug, Clone)]
pub(crate) struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the accumulator and return the next mixed 64-bit value
    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix64(self.state)
    }
}

/// splitmix64 output finalizer
pub(crate) fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
