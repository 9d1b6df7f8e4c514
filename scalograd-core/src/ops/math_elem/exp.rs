use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// Computes `e^a`.
pub fn exp_op(a: impl Into<Scalar>) -> Scalar {
    let a = a.into();
    Scalar::from_op(a.value().exp(), BackwardOp::Exp, vec![a])
}

pub(crate) fn exp_backward(grad_output: f64, output: f64) -> f64 {
    grad_output * output
}
