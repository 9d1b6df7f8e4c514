use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// Logistic sigmoid: `1 / (1 + e^-x)`.
pub fn sigmoid_op(a: impl Into<Scalar>) -> Scalar {
    let a = a.into();
    let value = 1.0 / (1.0 + (-a.value()).exp());
    Scalar::from_op(value, BackwardOp::Sigmoid, vec![a])
}

/// g'(x) = g(x) * (1 - g(x)), read off the node's own forward value.
pub(crate) fn sigmoid_backward(grad_output: f64, output: f64) -> f64 {
    grad_output * output * (1.0 - output)
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
