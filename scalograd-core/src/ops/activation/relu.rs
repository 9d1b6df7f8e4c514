use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// Applies the Rectified Linear Unit: `ReLU(x) = max(0, x)`.
///
/// # Subgradient at zero
/// ReLU is not differentiable at exactly `0.0`. The unit is treated as
/// inactive there: an input of `0.0` passes no gradient back. Only inputs
/// strictly greater than zero are active.
pub fn relu_op(a: impl Into<Scalar>) -> Scalar {
    let a = a.into();
    let value = if a.value() > 0.0 { a.value() } else { 0.0 };
    Scalar::from_op(value, BackwardOp::Relu, vec![a])
}

// Mask is 1 only for strictly positive inputs.
pub(crate) fn relu_backward(grad_output: f64, input: f64) -> f64 {
    if input > 0.0 {
        grad_output
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
