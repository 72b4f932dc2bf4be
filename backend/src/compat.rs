//! `rand_core` interop
//!
//! Lets [`XorShift128`] drive anything in the `rand` ecosystem. Output is
//! byte-for-byte the same as the [`RandomSource`] methods.

use rand_core::{Error, RngCore, SeedableRng};

use crate::rng::{RandomSource, XorShift128};

impl RngCore for XorShift128 {
    fn next_u32(&mut self) -> u32 {
        RandomSource::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        RandomSource::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        RandomSource::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        RandomSource::fill_bytes(self, dest);
        Ok(())
    }
}

impl SeedableRng for XorShift128 {
    /// Little-endian encoding of the 64-bit seed
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        XorShift128::with_seed(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        XorShift128::with_seed(state)
    }
}
