//! Sampler configuration.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::engine::{Engine, EngineKind};
use crate::error::Result;
use crate::lcg::LcgParams;

/// Draws per run when not configured.
pub const DEFAULT_DRAWS: usize = 10_000;

/// Which engine to run, how to seed it, and how many draws to take.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfig {
    pub engine: EngineKind,
    /// Explicit seed for reproducible runs. `None` seeds from the clock.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub seed: Option<u64>,
    pub draws: usize,
    /// Parameters for [`EngineKind::Lcg`]; ignored by other engines.
    pub lcg: LcgParams,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Default,
            seed: None,
            draws: DEFAULT_DRAWS,
            lcg: LcgParams::glibc(),
        }
    }
}

impl SamplerConfig {
    /// The configured seed, or one taken from the system clock.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }

    /// Build the configured engine. Fails only for an invalid LCG modulus.
    pub fn build_engine(&self) -> Result<Engine> {
        let seed = self.resolved_seed();
        match self.engine {
            EngineKind::Lcg => Engine::lcg(self.lcg, seed),
            kind => Ok(Engine::new(kind, seed)),
        }
    }
}

/// Nanoseconds since the Unix epoch, truncated to 64 bits.
pub fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seed = nanos as u64;
    tracing::debug!(seed, "seed derived from clock");
    seed
}
