//! Categorical remapping of uniform draws.
//!
//! A probability vector is normalized to sum to 1, turned into a cumulative
//! table `[0, p0, p0+p1, ..., 1]`, and a uniform value `u` maps to the
//! smallest index `i` with `u < cumulative[i + 1]`.
//!
//! Values `u >= 1` clamp to the last category instead of failing. When
//! round-off leaves the last prefix sum a hair below 1, a `u < 1` past it
//! maps to the last category with non-zero probability.

use rand::Rng;
use rand_distr::Distribution;

use crate::engine::Engine;
use crate::error::{Error, Result};

/// Divide every element by the sum.
///
/// Rejects empty input, non-finite or negative elements, and a zero sum.
/// Relative order of elements is preserved.
pub fn normalize(probabilities: &[f64]) -> Result<Vec<f64>> {
    if probabilities.is_empty() {
        return Err(Error::InvalidArgument("probabilities must be non-empty"));
    }
    let mut max = 0.0f64;
    for &p in probabilities {
        if !p.is_finite() {
            return Err(Error::InvalidArgument("probabilities must be finite"));
        }
        if p < 0.0 {
            return Err(Error::InvalidArgument("probabilities must be non-negative"));
        }
        max = max.max(p);
    }
    if max == 0.0 {
        return Err(Error::InvalidArgument("probabilities must not sum to zero"));
    }

    let sum: f64 = probabilities.iter().sum();
    if sum.is_finite() {
        return Ok(probabilities.iter().map(|p| p / sum).collect());
    }
    // Sum overflowed: rescale by the max first.
    let scaled: Vec<f64> = probabilities.iter().map(|p| p / max).collect();
    let sum: f64 = scaled.iter().sum();
    Ok(scaled.into_iter().map(|p| p / sum).collect())
}

/// Prefix sums of `probabilities`, starting at `0.0` (length `k + 1`).
pub fn cumulative(probabilities: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(probabilities.len() + 1);
    let mut acc = 0.0;
    out.push(acc);
    for &p in probabilities {
        acc += p;
        out.push(acc);
    }
    out
}

/// Map `value` in `[0, 1)` to a category index through the cumulative table
/// of `probabilities` (used as given; pass a normalized vector).
///
/// Values `>= 1` clamp to `probabilities.len() - 1`. A value below 1 that
/// falls past the last prefix sum maps to the last non-zero category, so a
/// zero-probability entry is never selected for `value < 1`.
/// Fails on an empty vector or a negative/NaN value.
pub fn transform(value: f64, probabilities: &[f64]) -> Result<usize> {
    if probabilities.is_empty() {
        return Err(Error::InvalidArgument("probabilities must be non-empty"));
    }
    check_unit_value(value)?;
    let last = probabilities.len() - 1;
    if value >= 1.0 {
        return Ok(last);
    }

    let cdf = cumulative(probabilities);
    for i in 0..probabilities.len() {
        if value < cdf[i + 1] {
            return Ok(i);
        }
    }
    let i = probabilities.iter().rposition(|&p| p > 0.0).unwrap_or(last);
    tracing::trace!(value, index = i, "prefix sums ended below 1");
    Ok(i)
}

fn check_unit_value(value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(Error::InvalidArgument("value must not be NaN"));
    }
    if value < 0.0 {
        return Err(Error::InvalidArgument("value must be >= 0"));
    }
    Ok(())
}

/// A normalized categorical distribution with its cumulative table.
///
/// Immutable after construction. The table is pinned to exactly `1.0` from
/// the last non-zero category onward, so zero-probability trailing categories
/// are never selected for `u < 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Categorical {
    probs: Vec<f64>,
    cdf: Vec<f64>,
}

impl Categorical {
    /// Normalize `raw` and build the cumulative table.
    pub fn new(raw: &[f64]) -> Result<Self> {
        let probs = normalize(raw)?;
        let mut cdf = cumulative(&probs);
        // `normalize` guarantees at least one positive entry.
        let last_positive = probs.iter().rposition(|&p| p > 0.0).unwrap_or(0);
        for c in &mut cdf[last_positive + 1..] {
            *c = 1.0;
        }
        tracing::debug!(categories = probs.len(), "categorical built");
        Ok(Self { probs, cdf })
    }

    /// Number of categories (`k >= 1`).
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// Whether there are no categories (never true after `new`).
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Normalized probabilities.
    pub fn probabilities(&self) -> &[f64] {
        &self.probs
    }

    /// Cumulative table, length `len() + 1`, from `0.0` to `1.0`.
    pub fn cumulative(&self) -> &[f64] {
        &self.cdf
    }

    /// Category for `value`; same contract as [`transform`].
    pub fn index_for(&self, value: f64) -> Result<usize> {
        check_unit_value(value)?;
        Ok(self.locate(value))
    }

    #[inline]
    fn locate(&self, value: f64) -> usize {
        let i = self.cdf[1..].partition_point(|&c| c <= value);
        if i < self.probs.len() {
            i
        } else {
            self.probs.len() - 1
        }
    }

    /// Draw one category using `engine`.
    pub fn draw(&self, engine: &mut Engine) -> usize {
        self.locate(engine.next_f64())
    }

    /// Draw `n` categories using `engine`.
    pub fn draw_n(&self, engine: &mut Engine, n: usize) -> Vec<usize> {
        (0..n).map(|_| self.draw(engine)).collect()
    }
}

impl Distribution<usize> for Categorical {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.locate(rng.random::<f64>())
    }
}
