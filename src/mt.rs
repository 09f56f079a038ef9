//! MT19937: the 32-bit Mersenne Twister (Matsumoto & Nishimura, 1998).
//!
//! Seeding follows the reference `init_genrand`, so outputs match other
//! MT19937 implementations (e.g. C++ `std::mt19937`) for the same `u32` seed.

use rand::{RngCore, SeedableRng};
use std::fmt;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;

/// Default seed of the reference implementation.
pub const MT19937_DEFAULT_SEED: u32 = 5489;

#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937 {
    mt: [u32; N],
    idx: usize,
}

impl Mt19937 {
    pub fn new(seed: u32) -> Self {
        let mut mt = [0u32; N];
        mt[0] = seed;
        for i in 1..N {
            let prev = mt[i - 1];
            mt[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { mt, idx: N }
    }

    /// Fold a 64-bit seed into the 32-bit seed space. Seeds below `2^32` map
    /// to themselves.
    pub fn from_u64_seed(seed: u64) -> Self {
        Self::new((seed ^ (seed >> 32)) as u32)
    }

    fn twist(&mut self) {
        for k in 0..N {
            let y = (self.mt[k] & UPPER_MASK) | (self.mt[(k + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            self.mt[k] = self.mt[(k + M) % N] ^ (y >> 1) ^ mag;
        }
        self.idx = 0;
    }

    /// Next tempered 32-bit output.
    #[inline]
    pub fn next_word(&mut self) -> u32 {
        if self.idx >= N {
            self.twist();
        }
        let mut y = self.mt[self.idx];
        self.idx += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^= y >> 18;
        y
    }

    /// Uniform value in `[0, 1)` with 53-bit resolution (`genrand_res53`).
    pub fn next_f64(&mut self) -> f64 {
        let a = u64::from(self.next_word() >> 5);
        let b = u64::from(self.next_word() >> 6);
        (a * 67_108_864 + b) as f64 * (1.0 / 9_007_199_254_740_992.0)
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(MT19937_DEFAULT_SEED)
    }
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937").field("idx", &self.idx).finish_non_exhaustive()
    }
}

impl RngCore for Mt19937 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_word());
        let lo = u64::from(self.next_word());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::from_u64_seed(state)
    }
}
