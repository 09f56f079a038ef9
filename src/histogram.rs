//! Per-category draw counts and a chi-square goodness-of-fit statistic.

use crate::distribution::Categorical;
use crate::engine::Engine;
use crate::error::{Error, Result};

/// Upper 0.1% critical values of the chi-square distribution, `df = 1..=10`.
pub const CHI_SQUARE_CRITICAL_001: [f64; 10] = [
    10.828, 13.816, 16.266, 18.467, 20.515, 22.458, 24.322, 26.124, 27.877, 29.588,
];

/// Critical value at the 0.1% level for `df` degrees of freedom, if tabulated.
pub fn chi_square_critical_001(df: usize) -> Option<f64> {
    df.checked_sub(1)
        .and_then(|i| CHI_SQUARE_CRITICAL_001.get(i))
        .copied()
}

/// Counts of category indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// Empty histogram over `k` categories.
    pub fn new(k: usize) -> Self {
        Self {
            counts: vec![0; k],
            total: 0,
        }
    }

    pub fn record(&mut self, index: usize) -> Result<()> {
        let Some(slot) = self.counts.get_mut(index) else {
            return Err(Error::InvalidArgument("category index out of range"));
        };
        *slot = slot.saturating_add(1);
        self.total = self.total.saturating_add(1);
        Ok(())
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Observed frequencies (`count / total`); all zero when empty.
    pub fn frequencies(&self) -> Vec<f64> {
        if self.total == 0 {
            return vec![0.0; self.counts.len()];
        }
        let n = self.total as f64;
        self.counts.iter().map(|&c| c as f64 / n).collect()
    }

    /// Pearson's statistic `Σ (obs - n·p)² / (n·p)` against `expected`
    /// probabilities.
    ///
    /// Categories with `p = 0` are skipped when empty; any observation in one
    /// makes the statistic infinite.
    pub fn chi_square(&self, expected: &[f64]) -> Result<f64> {
        if expected.len() != self.counts.len() {
            return Err(Error::LengthMismatch(self.counts.len(), expected.len()));
        }
        if self.total == 0 {
            return Err(Error::InvalidArgument("chi-square needs at least one draw"));
        }
        let n = self.total as f64;
        let mut stat = 0.0;
        for (&obs, &p) in self.counts.iter().zip(expected) {
            let e = n * p;
            if e <= 0.0 {
                if obs > 0 {
                    return Ok(f64::INFINITY);
                }
                continue;
            }
            let d = obs as f64 - e;
            stat += d * d / e;
        }
        Ok(stat)
    }
}

/// Draw `n` categories from `categorical` with `engine` and count them.
pub fn tally(engine: &mut Engine, categorical: &Categorical, n: usize) -> Histogram {
    let mut h = Histogram::new(categorical.len());
    for _ in 0..n {
        // `draw` is always in range.
        let i = categorical.draw(engine);
        h.counts[i] += 1;
        h.total += 1;
    }
    tracing::debug!(engine = engine.name(), draws = n, "tally complete");
    h
}
