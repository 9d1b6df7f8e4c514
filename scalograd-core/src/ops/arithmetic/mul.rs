use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// Computes `a * b`.
pub fn mul_op(a: impl Into<Scalar>, b: impl Into<Scalar>) -> Scalar {
    let (a, b) = (a.into(), b.into());
    Scalar::from_op(a.value() * b.value(), BackwardOp::Mul, vec![a, b])
}

// grad_a = grad_output * b, grad_b = grad_output * a
pub(crate) fn mul_backward(grad_output: f64, a: f64, b: f64) -> [f64; 2] {
    [grad_output * b, grad_output * a]
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
