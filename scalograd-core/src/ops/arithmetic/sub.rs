use super::{add_op, neg_op};
use crate::scalar::Scalar;

/// Computes `a - b`, recorded as `a + (-b)`.
///
/// Subtraction has no tag of its own: the graph holds an `Add` node whose
/// second operand is a `Neg` node over `b`.
pub fn sub_op(a: impl Into<Scalar>, b: impl Into<Scalar>) -> Scalar {
    add_op(a, neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
