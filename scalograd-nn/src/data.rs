//! Toy datasets for the training demo and tests.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use scalograd_core::ScalogradError;
use std::f64::consts::PI;

/// Two-dimensional points with `{-1, 1}` labels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub inputs: Vec<[f64; 2]>,
    pub labels: Vec<f64>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn half_circle(n: usize) -> impl Iterator<Item = f64> {
    let divisor = n.saturating_sub(1).max(1) as f64;
    (0..n).map(move |i| PI * i as f64 / divisor)
}

/// Two interleaving half circles.
///
/// The outer moon is labelled `-1`, the inner one `1`. Gaussian noise with
/// standard deviation `noise` is added to every coordinate and the samples
/// are shuffled.
///
/// # Errors
/// `ScalogradError::EmptyInput` if `n_samples` is zero,
/// `ScalogradError::InvalidHyperparameter` if `noise` is negative or not
/// finite.
pub fn make_moons<R: Rng + ?Sized>(
    n_samples: usize,
    noise: f64,
    rng: &mut R,
) -> Result<Dataset, ScalogradError> {
    if n_samples == 0 {
        return Err(ScalogradError::EmptyInput {
            operation: "make_moons".to_string(),
        });
    }
    if !(noise.is_finite() && noise >= 0.0) {
        return Err(ScalogradError::InvalidHyperparameter {
            name: "noise".to_string(),
            reason: format!("must be finite and non-negative, got {}", noise),
        });
    }
    let normal = Normal::new(0.0, noise).map_err(|e| ScalogradError::InvalidHyperparameter {
        name: "noise".to_string(),
        reason: e.to_string(),
    })?;

    let n_outer = n_samples / 2;
    let n_inner = n_samples - n_outer;
    let mut samples: Vec<([f64; 2], f64)> = Vec::with_capacity(n_samples);
    samples.extend(half_circle(n_outer).map(|t| ([t.cos(), t.sin()], -1.0)));
    samples.extend(half_circle(n_inner).map(|t| ([1.0 - t.cos(), 0.5 - t.sin()], 1.0)));

    if noise > 0.0 {
        for (point, _) in samples.iter_mut() {
            point[0] += normal.sample(rng);
            point[1] += normal.sample(rng);
        }
    }
    samples.shuffle(rng);

    debug!(
        "make_moons: {} samples ({} outer, {} inner), noise={}",
        n_samples, n_outer, n_inner, noise
    );
    let (inputs, labels) = samples.into_iter().unzip();
    Ok(Dataset { inputs, labels })
}

#[cfg(test)]
#[path = "data_test.rs"]
mod tests;
