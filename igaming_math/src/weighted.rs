//! Weighted discrete sampling.
//!
//! Draws an integer ticket in `[1, total]` and walks the cumulative
//! weights until the ticket is covered. No normalized probability table
//! is built.

use rand::{Rng, RngCore};
use tracing::trace;

use crate::arithmetic::round2;
use crate::error::{Error, Result};
use crate::random::{entropy_rng, seeded_rng, DefaultRng};

/// Weighted sampler owning its random source.
pub struct WeightedRandom<R: RngCore = DefaultRng> {
    rng: R,
}

impl WeightedRandom<DefaultRng> {
    /// Entropy-seeded sampler.
    pub fn new() -> Self {
        Self { rng: entropy_rng() }
    }

    /// Deterministic sampler: the same seed yields the same sequence of draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }
}

impl Default for WeightedRandom<DefaultRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> WeightedRandom<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Index drawn with probability proportional to its weight.
    pub fn generate(&mut self, weights: &[f64]) -> Result<usize> {
        draw(&mut self.rng, weights)
    }

    /// `count` independent draws.
    pub fn generate_multiple(&mut self, weights: &[f64], count: usize) -> Result<Vec<usize>> {
        (0..count).map(|_| self.generate(weights)).collect()
    }
}

/// One draw from a generator seeded with `seed`.
///
/// Two calls with the same seed and weights always return the same
/// index. The draw uses its own generator, so no other sampler's state
/// is affected.
pub fn generate_with_seed(weights: &[f64], seed: u64) -> Result<usize> {
    draw(&mut seeded_rng(seed), weights)
}

/// Each weight as a percentage of the total, 2 decimals. All zeros when
/// the total is not positive.
pub fn probabilities(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return vec![0.0; weights.len()];
    }
    weights.iter().map(|w| round2(w / total * 100.0)).collect()
}

fn total_weight(weights: &[f64]) -> Result<f64> {
    if weights.is_empty() {
        return Err(Error::EmptyInput("weight vector is empty".to_string()));
    }
    if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(Error::InvalidWeights(format!(
            "weights must be finite and non-negative, got {}",
            bad
        )));
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(Error::InvalidWeights(format!(
            "total weight must be positive, got {}",
            total
        )));
    }
    Ok(total)
}

fn draw<R: RngCore>(rng: &mut R, weights: &[f64]) -> Result<usize> {
    let total = total_weight(weights)?;
    let upper = (total.trunc() as u64).max(1);
    let ticket = rng.gen_range(1..=upper) as f64;

    let mut cumulative = 0.0;
    for (i, w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative >= ticket {
            return Ok(i);
        }
    }

    // Summation drift left the ticket uncovered.
    trace!(ticket, cumulative, "weighted draw fell through to last index");
    Ok(weights.len() - 1)
}
