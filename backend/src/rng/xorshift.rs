//! xorshift128 random number generator
//!
//! A fast PRNG built purely from xor and shift operations on four 32-bit
//! words. Deterministic and suitable for simulation, games and testing,
//! NOT for cryptography.
//!
//! # Algorithm
//!
//! Marsaglia's xorshift128 with shift triple (11, 8, 19). Every non-zero
//! 128-bit state is visited exactly once per period of 2^128 - 1. The
//! all-zero state is a fixed point and must never be entered; seeding goes
//! through splitmix64 so it never is.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers, on every platform.

use tracing::{debug, trace};

use super::seed::{EntropySeedSource, SeedSource};
use super::source::RandomSource;
use super::splitmix::SplitMix64;

/// The four xorshift128 state words
///
/// Plain value data. Never all zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XorShiftState {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl XorShiftState {
    /// Expand a 64-bit seed into a well-mixed state
    ///
    /// Two splitmix64 draws: the first fills `x` (low half) and `y` (high
    /// half), the second fills `z` and `w`.
    pub fn from_seed(seed: u64) -> Self {
        let mut mixer = SplitMix64::new(seed);
        let t0 = mixer.next_u64();
        let t1 = mixer.next_u64();
        Self {
            x: t0 as u32,
            y: (t0 >> 32) as u32,
            z: t1 as u32,
            w: (t1 >> 32) as u32,
        }
    }

    /// Build a state from raw words `[x, y, z, w]`
    ///
    /// Returns `None` for the all-zero state.
    ///
    /// # Example
    /// ```
    /// use xorshift_random_core_rs::XorShiftState;
    ///
    /// assert!(XorShiftState::from_words([0, 0, 0, 0]).is_none());
    /// assert!(XorShiftState::from_words([0, 0, 0, 1]).is_some());
    /// ```
    pub fn from_words(words: [u32; 4]) -> Option<Self> {
        let [x, y, z, w] = words;
        if x | y | z | w == 0 {
            return None;
        }
        Some(Self { x, y, z, w })
    }

    /// Raw words `[x, y, z, w]`
    pub fn words(&self) -> [u32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Advance one xorshift128 step and return the new `w`
    #[inline]
    pub fn step(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = (self.w ^ (self.w >> 19)) ^ (t ^ (t >> 8));
        self.w
    }
}

/// Deterministic random number generator using xorshift128
///
/// Single-owner: all generation goes through `&mut self`. Use one instance
/// per thread.
///
/// # Example
/// ```
/// use xorshift_random_core_rs::{RandomSource, XorShift128};
///
/// let mut rng = XorShift128::with_seed(12345);
/// let value = rng.next_u32();
/// let die = rng.next_in_range(1, 7).unwrap(); // [1, 7)
/// assert!((1..7).contains(&die));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift128 {
    state: XorShiftState,
}

impl XorShift128 {
    /// Create a generator seeded from the process-wide entropy source
    pub fn new() -> Self {
        Self::from_seed_source(&mut EntropySeedSource::new())
    }

    /// Create a new generator with given seed
    ///
    /// # Example
    /// ```
    /// use xorshift_random_core_rs::{RandomSource, XorShift128};
    ///
    /// let mut rng = XorShift128::with_seed(12345);
    /// assert_eq!(rng.next_u32(), 353_605_593);
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: XorShiftState::from_seed(seed),
        }
    }

    /// Create a generator from exactly one seed drawn from `source`
    pub fn from_seed_source<S: SeedSource + ?Sized>(source: &mut S) -> Self {
        let seed = source.next_seed();
        debug!(seed, "seeding xorshift128 from seed source");
        Self::with_seed(seed)
    }

    /// Resume from a previously captured state
    ///
    /// # Example
    /// ```
    /// use xorshift_random_core_rs::{RandomSource, XorShift128};
    ///
    /// let mut rng = XorShift128::with_seed(7);
    /// rng.next_u64();
    /// let mut replay = XorShift128::from_state(rng.state());
    /// assert_eq!(rng.next_u32(), replay.next_u32());
    /// ```
    pub fn from_state(state: XorShiftState) -> Self {
        Self { state }
    }

    /// Copy of the current state
    pub fn state(&self) -> XorShiftState {
        self.state
    }
}

impl Default for XorShift128 {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for XorShift128 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state.step()
    }

    fn reseed(&mut self, seed: u64) {
        trace!(seed, "reseeding xorshift128");
        self.state = XorShiftState::from_seed(seed);
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.state.step());
        let high = u64::from(self.state.step());
        low | (high << 32)
    }

    /// Same byte layout as the default, stepping a local copy of the state
    /// and committing it once at the end.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut state = self.state;

        let mut chunks = dest.chunks_exact_mut(4);
        for chunk in chunks.by_ref() {
            chunk.copy_from_slice(&state.step().to_le_bytes());
        }

        let remainder = chunks.into_remainder();
        if !remainder.is_empty() {
            let mut bits = state.step();
            for byte in remainder {
                *byte = bits as u8;
                bits >>= 8;
            }
        }

        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_expansion_golden_words() {
        let state = XorShiftState::from_seed(12345);
        assert_eq!(
            state.words(),
            [0xA9D1_11A0, 0x2211_8258, 0xF713_F8ED, 0x346E_DCE5]
        );
    }

    #[test]
    fn test_zero_seed_is_not_zero_state() {
        let state = XorShiftState::from_seed(0);
        assert_eq!(
            state.words(),
            [0x7B1D_CDAF, 0xE220_A839, 0xA1B9_65F4, 0x6E78_9E6A]
        );
    }

    #[test]
    fn test_step_shifts_word_pipeline() {
        let mut state = XorShiftState::from_words([1, 2, 3, 4]).unwrap();
        let out = state.step();
        let [x, y, z, w] = state.words();
        assert_eq!((x, y, z), (2, 3, 4));
        assert_eq!(w, out);

        // t = 1 ^ (1 << 11) = 0x801; w = (4 ^ 0) ^ (0x801 ^ 0x8)
        assert_eq!(out, 4 ^ 0x801 ^ 0x8);
    }

    #[test]
    fn test_next_u64_is_two_steps_low_first() {
        let mut a = XorShift128::with_seed(12345);
        let mut b = XorShift128::with_seed(12345);

        let low = u64::from(b.next_u32());
        let high = u64::from(b.next_u32());
        let combined = a.next_u64();
        assert_eq!(combined, low | (high << 32));
        assert_eq!(combined, 13_528_483_844_098_070_489);
    }

    #[test]
    fn test_fill_bytes_matches_default_layout() {
        struct Plain(XorShiftState);
        impl RandomSource for Plain {
            fn next_u32(&mut self) -> u32 {
                self.0.step()
            }
            fn reseed(&mut self, seed: u64) {
                self.0 = XorShiftState::from_seed(seed);
            }
        }

        for len in [0usize, 1, 2, 3, 4, 5, 7, 8, 33, 100] {
            let mut fast = XorShift128::with_seed(99);
            let mut plain = Plain(XorShiftState::from_seed(99));

            let mut a = vec![0u8; len];
            let mut b = vec![0u8; len];
            fast.fill_bytes(&mut a);
            plain.fill_bytes(&mut b);

            assert_eq!(a, b, "layout differs for len {}", len);
            assert_eq!(fast.state(), plain.0, "state differs for len {}", len);
        }
    }

    #[test]
    fn test_reseed_replaces_state() {
        let mut rng = XorShift128::with_seed(1);
        rng.next_u32();
        rng.reseed(12345);
        assert_eq!(rng.state(), XorShiftState::from_seed(12345));
    }
}
