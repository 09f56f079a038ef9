//! Linear-congruential generator.
//!
//! Recurrence: `x' = (a*x + c) mod m`. The product is formed in `u128`, so any
//! `u64` parameters are accepted without wrapping before the modulus.
//!
//! Statistical quality is entirely a function of `(m, a, c)`; nothing here
//! checks for full period. Use one of the [`LcgParams`] presets unless you
//! know why you want something else.

use crate::error::{Error, Result};

/// LCG parameters: modulus, multiplier, increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LcgParams {
    /// Modulus `m` (must be > 0).
    pub modulus: u64,
    /// Multiplier `a`.
    pub multiplier: u64,
    /// Increment `c`.
    pub increment: u64,
}

impl LcgParams {
    /// `m = 2^31, a = 1103515245, c = 12345` (the classic C library `rand`).
    pub const fn glibc() -> Self {
        Self {
            modulus: 1 << 31,
            multiplier: 1_103_515_245,
            increment: 12_345,
        }
    }

    /// Park–Miller "minimal standard": `m = 2^31 - 1, a = 16807, c = 0`.
    ///
    /// Multiplicative: a state of zero is a fixed point, so seeds must be
    /// non-zero modulo `m`.
    pub const fn minstd() -> Self {
        Self {
            modulus: (1 << 31) - 1,
            multiplier: 16_807,
            increment: 0,
        }
    }

    /// `m = 2^32, a = 1664525, c = 1013904223` (Numerical Recipes).
    pub const fn numerical_recipes() -> Self {
        Self {
            modulus: 1 << 32,
            multiplier: 1_664_525,
            increment: 1_013_904_223,
        }
    }
}

impl Default for LcgParams {
    fn default() -> Self {
        Self::glibc()
    }
}

/// Linear-congruential generator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    params: LcgParams,
    x: u64,
}

impl Lcg {
    /// Create a generator. The seed is reduced modulo `modulus`.
    pub fn new(modulus: u64, multiplier: u64, increment: u64, seed: u64) -> Result<Self> {
        Self::from_params(
            LcgParams {
                modulus,
                multiplier,
                increment,
            },
            seed,
        )
    }

    /// Create a generator from a parameter set.
    pub fn from_params(params: LcgParams, seed: u64) -> Result<Self> {
        if params.modulus == 0 {
            return Err(Error::InvalidArgument("lcg modulus must be > 0"));
        }
        Ok(Self::seeded(params, seed))
    }

    /// Generator with [`LcgParams::glibc`] parameters.
    pub fn glibc(seed: u64) -> Self {
        Self::seeded(LcgParams::glibc(), seed)
    }

    // Caller guarantees `params.modulus > 0`.
    fn seeded(params: LcgParams, seed: u64) -> Self {
        let x = seed % params.modulus;
        tracing::debug!(
            modulus = params.modulus,
            multiplier = params.multiplier,
            increment = params.increment,
            state = x,
            "lcg seeded"
        );
        Self { params, x }
    }

    pub fn params(&self) -> LcgParams {
        self.params
    }

    /// Current state `x` (always `< modulus`).
    pub fn state(&self) -> u64 {
        self.x
    }

    /// Advance once and return the new state.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        let LcgParams {
            modulus,
            multiplier,
            increment,
        } = self.params;
        let next = (u128::from(multiplier) * u128::from(self.x) + u128::from(increment))
            % u128::from(modulus);
        // `next < modulus <= u64::MAX`.
        self.x = next as u64;
        self.x
    }

    /// Advance and return an integer in `[min, max)`.
    ///
    /// Returns `min + (x mod (max - min))`. The reduction is biased unless the
    /// span divides `m`; keep `m` large relative to the span.
    ///
    /// Fails with [`Error::InvalidArgument`] when `max <= min`; the state does
    /// not advance in that case.
    pub fn next(&mut self, min: i64, max: i64) -> Result<i64> {
        let span = range_span(min, max)?;
        let x = self.next_raw();
        let offset = u128::from(x) % u128::from(span);
        // `min + offset < max`, so the cast back is lossless.
        Ok((i128::from(min) + offset as i128) as i64)
    }

    /// Advance and return `x / m`, in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let x = self.next_raw();
        unit_from_ratio(x, self.params.modulus)
    }
}

/// `max - min` as an unsigned span, rejecting empty ranges.
pub(crate) fn range_span(min: i64, max: i64) -> Result<u64> {
    if max <= min {
        return Err(Error::InvalidArgument("range requires max > min"));
    }
    // At most 2^64 - 1.
    Ok((i128::from(max) - i128::from(min)) as u64)
}

/// `x / m` for `x < m`, kept strictly below 1 despite f64 rounding.
fn unit_from_ratio(x: u64, m: u64) -> f64 {
    let u = x as f64 / m as f64;
    if u < 1.0 {
        u
    } else {
        1.0 - f64::EPSILON / 2.0
    }
}
