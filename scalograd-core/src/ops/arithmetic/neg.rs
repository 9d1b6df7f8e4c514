use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// Computes `-a` as a dedicated unary node.
pub fn neg_op(a: impl Into<Scalar>) -> Scalar {
    let a = a.into();
    Scalar::from_op(-a.value(), BackwardOp::Neg, vec![a])
}

pub(crate) fn neg_backward(grad_output: f64) -> f64 {
    -grad_output
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
