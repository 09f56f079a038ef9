//! `catdraw`: seedable PRNG engines and categorical remapping of uniform draws.
//!
//! Two independent pieces connected only by data flow:
//!
//! - **Generators**: a closed set of engines behind [`Engine`]:
//!   [`EngineKind::Default`] (`rand`'s `StdRng`), [`EngineKind::XorShift`]
//!   ([`XorShift64Star`]), [`EngineKind::MersenneTwister`] ([`Mt19937`]) and
//!   [`EngineKind::Lcg`] ([`Lcg`]). Each produces a uniform `f64` in `[0, 1)` or
//!   an integer in `[min, max)`, deterministically from its seed.
//! - **Distribution mapping**: [`normalize`] turns non-negative weights into a
//!   probability vector; [`transform`] maps a uniform value to a category
//!   index through the cumulative table, clamping to the last category when
//!   the value falls past the end. [`Categorical`] keeps the normalized vector
//!   and its table for repeated draws.
//!
//! [`Histogram`] / [`tally`] count draws per category and score them against
//! the expected probabilities with Pearson's chi-square statistic.
//!
//! **Goals:**
//! - **Deterministic**: same engine + seed → same sequence.
//! - **Explicit ownership**: no global generator; every engine is a value you
//!   construct and pass around. Generators are not synchronized; give each
//!   thread its own.
//! - **No silent overflow**: LCG arithmetic is done in `u128`, range spans in
//!   `i128`, so any `u64` parameters and any `i64` bounds are accepted.
//!
//! **Non-goals:**
//! - Not a statistics package: the chi-square statistic is there to check
//!   engine output, not to provide a test suite.
//! - No plotting. The `catdraw` binary (feature `cli`) prints a count table.
//!
//! ```rust
//! use catdraw::{tally, Categorical, Engine, EngineKind};
//!
//! let dist = Categorical::new(&[1.0, 1.0, 2.0]).unwrap();
//! assert_eq!(dist.probabilities(), &[0.25, 0.25, 0.5]);
//!
//! let mut engine = Engine::new(EngineKind::MersenneTwister, 42);
//! let hist = tally(&mut engine, &dist, 10_000);
//! let freq = hist.frequencies();
//! assert!((freq[2] - 0.5).abs() < 0.05);
//! ```

#![forbid(unsafe_code)]

mod error;
pub use error::*;

mod lcg;
pub use lcg::*;

mod xorshift;
pub use xorshift::*;

mod mt;
pub use mt::*;

mod engine;
pub use engine::*;

mod distribution;
pub use distribution::*;

mod histogram;
pub use histogram::*;

mod config;
pub use config::*;
