use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// Computes `a + b`.
pub fn add_op(a: impl Into<Scalar>, b: impl Into<Scalar>) -> Scalar {
    let (a, b) = (a.into(), b.into());
    Scalar::from_op(a.value() + b.value(), BackwardOp::Add, vec![a, b])
}

/// d(a+b)/da = d(a+b)/db = 1: the incoming gradient passes through unchanged.
pub(crate) fn add_backward(grad_output: f64) -> [f64; 2] {
    [grad_output, grad_output]
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
