//! Random source capability
//!
//! [`RandomSource`] is the contract callers program against. Implementors
//! supply raw 32-bit output and re-seeding; every typed value (bounded
//! integers, unit doubles and floats, booleans, bytes, buffers) is derived
//! here on top of that raw output.
//!
//! # Bias avoidance
//!
//! - Bounded integers scale a unit double instead of taking a modulus.
//! - [`RandomSource::next`] masks to 31 bits and resamples the single
//!   excluded value rather than folding it onto another one.
//! - Floating-point outputs are built from exact power-of-two scaling, so
//!   [`RandomSource::next_f64`] tops out at `1 - 2^-32` and never reaches 1.0.

use thiserror::Error;

/// 2^-32, exact in f64
const INV_2_POW_32: f64 = 1.0 / 4_294_967_296.0;

/// 2^-24, exact in f32
const INV_2_POW_24: f32 = 1.0 / 16_777_216.0;

/// Bit tested by [`RandomSource::next_bool`]
const BOOL_BIT: u32 = 0x8000;

/// Errors raised by range-generation preconditions
///
/// Validation happens before the generator is stepped, so a call that
/// returns one of these leaves the generator exactly where it was.
#[derive(Debug, Error, PartialEq)]
pub enum RandomError {
    #[error("max_value must be non-negative, got {max_value}")]
    NegativeMaxValue { max_value: i32 },

    #[error("min_value {min_value} must not exceed max_value {max_value}")]
    MinExceedsMax { min_value: i32, max_value: i32 },
}

/// A reproducible source of random values
///
/// Only [`next_u32`](RandomSource::next_u32) and
/// [`reseed`](RandomSource::reseed) are required. The trait is object safe,
/// so alternate generators can be swapped in behind `&mut dyn RandomSource`.
///
/// Implementations are single-owner: every method takes `&mut self`, and
/// sharing one instance across threads needs external synchronisation.
///
/// # Example
/// ```
/// use xorshift_random_core_rs::{RandomSource, XorShift128};
///
/// fn roll(rng: &mut dyn RandomSource) -> i32 {
///     rng.next_in_range(1, 7).unwrap()
/// }
///
/// let mut rng = XorShift128::with_seed(12345);
/// let die = roll(&mut rng);
/// assert!((1..7).contains(&die));
/// ```
pub trait RandomSource {
    /// Raw 32-bit output, full range `[0, u32::MAX]`
    fn next_u32(&mut self) -> u32;

    /// Replace the entire generator state with the expansion of `seed`
    ///
    /// After this call the source produces exactly the sequence of a fresh
    /// source constructed with the same seed.
    fn reseed(&mut self, seed: u64);

    /// Raw 64-bit output built from two 32-bit draws
    ///
    /// The first draw lands in the low 32 bits, the second in the high 32 bits.
    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        low | (high << 32)
    }

    /// Integer in `[0, i32::MAX)`
    ///
    /// Masks off the sign bit and resamples when the result is `i32::MAX`.
    fn next(&mut self) -> i32 {
        loop {
            let value = self.next_u32() & 0x7FFF_FFFF;
            if value != 0x7FFF_FFFF {
                return value as i32;
            }
        }
    }

    /// Integer in `[0, max_value)`
    ///
    /// Returns 0 when `max_value` is 0.
    ///
    /// # Errors
    /// [`RandomError::NegativeMaxValue`] if `max_value < 0`.
    fn next_below(&mut self, max_value: i32) -> Result<i32, RandomError> {
        if max_value < 0 {
            return Err(RandomError::NegativeMaxValue { max_value });
        }
        Ok((self.next_f64() * f64::from(max_value)) as i32)
    }

    /// Integer in `[min_value, max_value)`
    ///
    /// Returns `min_value` when the two bounds are equal.
    ///
    /// # Errors
    /// [`RandomError::MinExceedsMax`] if `min_value > max_value`.
    fn next_in_range(&mut self, min_value: i32, max_value: i32) -> Result<i32, RandomError> {
        if min_value > max_value {
            return Err(RandomError::MinExceedsMax {
                min_value,
                max_value,
            });
        }

        let range = i64::from(max_value) - i64::from(min_value);
        if range <= i64::from(i32::MAX) {
            let offset = (self.next_f64() * range as f64) as i32;
            Ok(offset + min_value)
        } else {
            // Only the near-full i32 span lands here; the sum is back in range.
            let offset = (self.next_f64() * range as f64) as i64;
            Ok((offset + i64::from(min_value)) as i32)
        }
    }

    /// Integer in `[0, i32::MAX]`
    ///
    /// Drops the lowest bit of a raw draw; every 31-bit pattern is reachable.
    fn next_i32(&mut self) -> i32 {
        (self.next_u32() >> 1) as i32
    }

    /// Double in `[0.0, 1.0)`
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) * INV_2_POW_32
    }

    /// Double in `(0.0, 1.0)`
    ///
    /// Forces the draw odd, giving `[1, 2^32 - 1]` before scaling.
    fn next_f64_non_zero(&mut self) -> f64 {
        f64::from((self.next_u32() & !1) + 1) * INV_2_POW_32
    }

    /// Single-precision float in `[0.0, 1.0)` from the top 24 bits
    fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * INV_2_POW_24
    }

    /// Fair coin: `true` when bit 15 of a raw draw is clear
    fn next_bool(&mut self) -> bool {
        self.next_u32() & BOOL_BIT == 0
    }

    /// Byte taken from bits 24..32 of a 64-bit draw
    fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 24) as u8
    }

    /// Fill `dest` with random bytes
    ///
    /// Each 4-byte group takes one draw, written little-endian. A trailing
    /// 1-3 byte remainder takes one more draw, emitted lowest byte first.
    /// Exactly `ceil(dest.len() / 4)` draws are consumed.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(4);
        for chunk in chunks.by_ref() {
            chunk.copy_from_slice(&self.next_u32().to_le_bytes());
        }

        let remainder = chunks.into_remainder();
        if !remainder.is_empty() {
            let mut bits = self.next_u32();
            for byte in remainder {
                *byte = bits as u8;
                bits >>= 8;
            }
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }

    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }

    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest)
    }
}
