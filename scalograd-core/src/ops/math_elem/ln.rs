use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// Natural logarithm.
///
/// Non-positive inputs follow `f64::ln`: `ln(0) = -inf`, `ln(x < 0) = NaN`.
pub fn ln_op(a: impl Into<Scalar>) -> Scalar {
    let a = a.into();
    Scalar::from_op(a.value().ln(), BackwardOp::Ln, vec![a])
}

pub(crate) fn ln_backward(grad_output: f64, input: f64) -> f64 {
    grad_output / input
}
