//! Closed set of seedable generator engines.
//!
//! Every engine exposes the same two draws: a uniform `f64` in `[0, 1)` and an
//! integer in `[min, max)`. Each variant owns its state; nothing is shared.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::lcg::{range_span, Lcg, LcgParams};
use crate::mt::Mt19937;
use crate::xorshift::XorShift64Star;

/// Which engine to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EngineKind {
    /// `rand`'s `StdRng`.
    #[default]
    Default,
    /// xorshift64*.
    XorShift,
    /// MT19937.
    #[cfg_attr(feature = "serde", serde(rename = "mt", alias = "mersenne_twister"))]
    MersenneTwister,
    /// Linear-congruential generator.
    Lcg,
}

impl EngineKind {
    pub const ALL: [EngineKind; 4] = [
        EngineKind::Default,
        EngineKind::XorShift,
        EngineKind::MersenneTwister,
        EngineKind::Lcg,
    ];

    /// Short name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            EngineKind::Default => "default",
            EngineKind::XorShift => "xorshift",
            EngineKind::MersenneTwister => "mt",
            EngineKind::Lcg => "lcg",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "std" | "stdrng" => Ok(EngineKind::Default),
            "xorshift" | "xorshift64*" => Ok(EngineKind::XorShift),
            "mt" | "mt19937" | "mersenne_twister" | "mersenne-twister" => {
                Ok(EngineKind::MersenneTwister)
            }
            "lcg" => Ok(EngineKind::Lcg),
            _ => Err(Error::InvalidArgument(
                "engine must be one of default|xorshift|mt|lcg",
            )),
        }
    }
}

/// A seeded generator engine.
#[derive(Debug, Clone)]
pub enum Engine {
    Default(StdRng),
    XorShift(XorShift64Star),
    MersenneTwister(Box<Mt19937>),
    Lcg(Lcg),
}

impl Engine {
    /// Build an engine of `kind` from a seed. The LCG variant uses
    /// [`LcgParams::glibc`].
    pub fn new(kind: EngineKind, seed: u64) -> Self {
        tracing::debug!(engine = %kind, seed, "engine seeded");
        match kind {
            EngineKind::Default => Engine::Default(StdRng::seed_from_u64(seed)),
            EngineKind::XorShift => Engine::XorShift(XorShift64Star::new(seed)),
            EngineKind::MersenneTwister => {
                Engine::MersenneTwister(Box::new(Mt19937::from_u64_seed(seed)))
            }
            EngineKind::Lcg => Engine::Lcg(Lcg::glibc(seed)),
        }
    }

    /// LCG engine with explicit parameters.
    pub fn lcg(params: LcgParams, seed: u64) -> Result<Self> {
        Lcg::from_params(params, seed).map(Engine::Lcg)
    }

    pub fn kind(&self) -> EngineKind {
        match self {
            Engine::Default(_) => EngineKind::Default,
            Engine::XorShift(_) => EngineKind::XorShift,
            Engine::MersenneTwister(_) => EngineKind::MersenneTwister,
            Engine::Lcg(_) => EngineKind::Lcg,
        }
    }

    /// Display name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Default(_) => "StdRng",
            Engine::XorShift(_) => "xorshift64*",
            Engine::MersenneTwister(_) => "mt19937",
            Engine::Lcg(_) => "lcg",
        }
    }

    /// Uniform value in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        match self {
            Engine::Default(rng) => rng.random::<f64>(),
            Engine::XorShift(g) => g.next_f64(),
            Engine::MersenneTwister(g) => g.next_f64(),
            Engine::Lcg(g) => g.next_f64(),
        }
    }

    /// Integer in `[min, max)`. Fails when `max <= min`.
    pub fn next_in_range(&mut self, min: i64, max: i64) -> Result<i64> {
        match self {
            Engine::Lcg(g) => g.next(min, max),
            Engine::Default(rng) => {
                range_span(min, max)?;
                Ok(rng.random_range(min..max))
            }
            Engine::XorShift(g) => {
                let span = range_span(min, max)?;
                Ok(scale_into_range(g.next_f64(), min, span))
            }
            Engine::MersenneTwister(g) => {
                let span = range_span(min, max)?;
                Ok(scale_into_range(g.next_f64(), min, span))
            }
        }
    }

    /// `n` uniform values in `[0, 1)`.
    pub fn generate(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_f64()).collect()
    }
}

/// `min + floor(u * span)`, clamped to `span - 1` against f64 round-up.
fn scale_into_range(u: f64, min: i64, span: u64) -> i64 {
    let offset = ((u * span as f64) as u64).min(span - 1);
    (i128::from(min) + i128::from(offset)) as i64
}
