use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// Hyperbolic tangent.
pub fn tanh_op(a: impl Into<Scalar>) -> Scalar {
    let a = a.into();
    Scalar::from_op(a.value().tanh(), BackwardOp::Tanh, vec![a])
}

pub(crate) fn tanh_backward(grad_output: f64, output: f64) -> f64 {
    grad_output * (1.0 - output * output)
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
