//! Loss and regularization functions.
//!
//! Each function combines prediction nodes with plain targets using the
//! engine's primitives and returns nodes usable as a `backward()` root.

use crate::parameter::Parameter;
use num_traits::Zero;
use scalograd_core::{Scalar, ScalogradError};

fn check_lengths(operation: &str, left: usize, right: usize) -> Result<(), ScalogradError> {
    if left != right {
        return Err(ScalogradError::LengthMismatch {
            operation: operation.to_string(),
            left,
            right,
        });
    }
    if left == 0 {
        return Err(ScalogradError::EmptyInput {
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Per-sample hinge loss `relu(1 - y * y_hat)` for labels in `{-1, 1}`.
pub fn svm_max_margin_loss(
    outputs: &[Scalar],
    labels: &[f64],
) -> Result<Vec<Scalar>, ScalogradError> {
    check_lengths("svm_max_margin_loss", outputs.len(), labels.len())?;
    Ok(outputs
        .iter()
        .zip(labels)
        .map(|(output, &label)| (1.0 + -label * output).relu())
        .collect())
}

/// Arithmetic mean of per-sample losses.
pub fn mean_loss(losses: &[Scalar]) -> Result<Scalar, ScalogradError> {
    if losses.is_empty() {
        return Err(ScalogradError::EmptyInput {
            operation: "mean_loss".to_string(),
        });
    }
    let total: Scalar = losses.iter().sum();
    Ok(total / losses.len() as f64)
}

/// Mean squared error between predictions and targets.
pub fn mse_loss(outputs: &[Scalar], targets: &[f64]) -> Result<Scalar, ScalogradError> {
    check_lengths("mse_loss", outputs.len(), targets.len())?;
    let squared: Vec<Scalar> = outputs
        .iter()
        .zip(targets)
        .map(|(output, &target)| (output - target).pow(2.0))
        .collect();
    mean_loss(&squared)
}

/// `alpha * sum(p * p)` over the current leaves of `params`.
///
/// An empty parameter list yields a constant zero.
pub fn l2_regularization(params: &[Parameter], alpha: f64) -> Scalar {
    if params.is_empty() {
        return Scalar::zero();
    }
    let sum_sq: Scalar = params
        .iter()
        .map(|p| {
            let s = p.scalar();
            &s * &s
        })
        .sum();
    alpha * sum_sq
}

/// Fraction of samples whose prediction has the same sign as the label.
///
/// A prediction of exactly zero counts as wrong.
pub fn accuracy(outputs: &[Scalar], labels: &[f64]) -> Result<f64, ScalogradError> {
    check_lengths("accuracy", outputs.len(), labels.len())?;
    let correct = outputs
        .iter()
        .zip(labels)
        .filter(|(output, label)| output.value() * **label > 0.0)
        .count();
    Ok(correct as f64 / outputs.len() as f64)
}

#[cfg(test)]
#[path = "loss_test.rs"]
mod tests;
