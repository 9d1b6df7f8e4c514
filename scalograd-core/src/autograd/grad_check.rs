use crate::scalar::Scalar;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {value_plus:?}, f(x-eps): {value_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Finite-difference step must be positive and finite, got {0:?}")]
    InvalidEpsilon(f64),
}

/// Central-difference estimate of the gradient of `f` at `point`:
/// `(f(x + eps·e_i) - f(x - eps·e_i)) / (2·eps)` for each coordinate `i`.
pub fn finite_diff_grad<F>(f: F, point: &[f64], epsilon: f64) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut perturbed = point.to_vec();
    (0..point.len())
        .map(|i| {
            perturbed[i] = point[i] + epsilon;
            let plus = f(&perturbed);
            perturbed[i] = point[i] - epsilon;
            let minus = f(&perturbed);
            perturbed[i] = point[i];
            (plus - minus) / (2.0 * epsilon)
        })
        .collect()
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` builds an expression from one leaf per entry of `inputs`; it is called
/// once for the analytical pass and twice per input for the numerical estimate,
/// so it must build the same expression every time.
///
/// A gradient passes when it is within `tolerance` of the estimate either in
/// absolute or in relative terms.
///
/// # Returns
/// The analytical gradients, one per input, when every input passes.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Scalar]) -> Scalar,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    let leaves = Scalar::from_slice(inputs);
    let output = func(&leaves);
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(Scalar::grad).collect();

    let evaluate = |values: &[f64]| func(&Scalar::from_slice(values)).value();
    let mut perturbed = inputs.to_vec();

    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        perturbed[input_index] = inputs[input_index] + epsilon;
        let value_plus = evaluate(&perturbed);
        perturbed[input_index] = inputs[input_index] - epsilon;
        let value_minus = evaluate(&perturbed);
        perturbed[input_index] = inputs[input_index];

        let numerical_grad = (value_plus - value_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                value_plus,
                value_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        debug!(
            "check_grad: input {} analytical={} numerical={}",
            input_index, analytical_grad, numerical_grad
        );
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(analytical_grads)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
