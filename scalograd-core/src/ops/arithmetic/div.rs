use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// Computes `a / b`.
///
/// Division by zero is not an error: it yields `±inf` or `NaN` exactly as `f64`
/// division does, and the same values flow through the backward pass.
pub fn div_op(a: impl Into<Scalar>, b: impl Into<Scalar>) -> Scalar {
    let (a, b) = (a.into(), b.into());
    Scalar::from_op(a.value() / b.value(), BackwardOp::Div, vec![a, b])
}

/// d(a/b)/da = 1/b, d(a/b)/db = -a/b².
pub(crate) fn div_backward(grad_output: f64, a: f64, b: f64) -> [f64; 2] {
    [grad_output / b, -grad_output * a / (b * b)]
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
