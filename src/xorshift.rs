//! xorshift64* generator.
//!
//! Marsaglia xorshift on a single 64-bit word, followed by Vigna's
//! multiplicative output scramble. Fast, 64 bits of state, period `2^64 - 1`.
//! Not cryptographically secure.

use rand::{RngCore, SeedableRng};

/// Replacement for a zero seed (zero is a fixed point of the xorshift step).
const ZERO_SEED_REPLACEMENT: u64 = 0x9E37_79B9_7F4A_7C15;
const OUTPUT_MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

/// xorshift64* state. Never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    #[inline]
    fn step(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(OUTPUT_MULTIPLIER)
    }

    /// Uniform value in `[0, 1)` from the top 53 bits.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.step() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl RngCore for XorShift64Star {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // High bits are the better-mixed half.
        (self.step() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for XorShift64Star {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
