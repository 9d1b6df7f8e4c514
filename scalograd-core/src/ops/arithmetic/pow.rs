use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// Raises `a` to a constant power: `a ^ exponent`.
///
/// The exponent is a plain number and receives no gradient.
///
/// # Domain
/// Follows `f64::powf`. A zero base with a negative exponent gives `inf`, and a
/// negative base with a non-integral exponent gives `NaN`. Neither is reported
/// as an error; the non-finite value propagates through the graph and into the
/// gradients computed from it.
pub fn pow_op(a: impl Into<Scalar>, exponent: f64) -> Scalar {
    let a = a.into();
    Scalar::from_op(a.value().powf(exponent), BackwardOp::Pow { exponent }, vec![a])
}

/// Power rule: d(a^k)/da = k * a^(k-1).
pub(crate) fn pow_backward(grad_output: f64, a: f64, exponent: f64) -> f64 {
    grad_output * exponent * a.powf(exponent - 1.0)
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
