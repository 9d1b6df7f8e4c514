use crate::autograd::{graph, BackwardOp, NodeId};
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};
use crate::ops::arithmetic::pow_op;
use crate::ops::math_elem::{exp_op, ln_op};
use crate::scalar_data::ScalarData;
use std::fmt;
use std::rc::Rc;

/// A tracked scalar: a node of the computation graph.
///
/// `Scalar` is a reference-counted handle; cloning is O(1) and the clone refers
/// to the same node, so a value can feed any number of downstream operations.
/// Every node owns handles to its operands, never to its consumers, so a graph
/// is freed once its root and intermediates go out of scope.
///
/// `Scalar` is deliberately `!Send`: one graph belongs to one thread.
#[derive(Clone)]
pub struct Scalar {
    pub(crate) data: Rc<ScalarData>,
}

/// Creates a leaf scalar. Shorthand for [`Scalar::new`].
pub fn scalar(value: f64) -> Scalar {
    Scalar::new(value)
}

impl Scalar {
    /// Creates a leaf node with the given value and a zero gradient.
    pub fn new(value: f64) -> Self {
        Scalar::from_op(value, BackwardOp::Leaf, Vec::new())
    }

    /// Creates one leaf per value.
    pub fn from_slice(values: &[f64]) -> Vec<Scalar> {
        values.iter().copied().map(Scalar::new).collect()
    }

    /// Builds an operation node. `value` must already be the forward result.
    pub(crate) fn from_op(value: f64, op: BackwardOp, operands: Vec<Scalar>) -> Self {
        Scalar {
            data: Rc::new(ScalarData::new(value, op, operands)),
        }
    }

    /// Attaches a display label (used by `Debug` and DOT export).
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    pub fn set_label(&self, label: impl Into<String>) {
        *self.data.label.borrow_mut() = Some(label.into());
    }

    pub fn label(&self) -> Option<String> {
        self.data.label.borrow().clone()
    }

    /// The forward value, computed once at construction.
    pub fn value(&self) -> f64 {
        self.data.value
    }

    /// The gradient accumulated by the most recent backward pass.
    pub fn grad(&self) -> f64 {
        self.data.grad.get()
    }

    /// The operation that produced this node.
    pub fn op(&self) -> BackwardOp {
        self.data.op
    }

    pub fn operands(&self) -> &[Scalar] {
        &self.data.operands
    }

    pub fn is_leaf(&self) -> bool {
        self.data.operands.is_empty()
    }

    /// Identity of the underlying node; two handles compare equal only if they
    /// share the node, regardless of value.
    pub fn id(&self) -> NodeId {
        NodeId::of(self)
    }

    pub fn ptr_eq(&self, other: &Scalar) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.data.grad.set(grad);
    }

    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.data.grad.set(self.data.grad.get() + delta);
    }

    /// Computes d(self)/d(node) for every node reachable from `self`.
    ///
    /// Gradients of all reachable nodes are reset first, so calling this twice
    /// on the same root yields the same gradients both times.
    pub fn backward(&self) {
        graph::backward(self);
    }

    /// Resets the gradient of every node reachable from `self` to 0.0.
    pub fn zero_grad(&self) {
        graph::zero_grad(self);
    }

    /// `self ^ exponent` for a constant exponent. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Scalar {
        pow_op(self, exponent)
    }

    pub fn relu(&self) -> Scalar {
        relu_op(self)
    }

    pub fn sigmoid(&self) -> Scalar {
        sigmoid_op(self)
    }

    pub fn tanh(&self) -> Scalar {
        tanh_op(self)
    }

    pub fn exp(&self) -> Scalar {
        exp_op(self)
    }

    pub fn ln(&self) -> Scalar {
        ln_op(self)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::new(value)
    }
}

impl From<&Scalar> for Scalar {
    fn from(scalar: &Scalar) -> Self {
        scalar.clone()
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Scalar");
        s.field("value", &self.value())
            .field("grad", &self.grad())
            .field("op", &self.op());
        if let Some(label) = self.label() {
            s.field("label", &label);
        }
        s.finish()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scalar(value={:.4}, grad={:.4}, op={})",
            self.value(),
            self.grad(),
            self.op()
        )
    }
}

impl std::iter::Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::new(0.0), |acc, x| acc + x)
    }
}

impl<'a> std::iter::Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::new(0.0), |acc, x| acc + x)
    }
}

impl num_traits::Zero for Scalar {
    fn zero() -> Self {
        Scalar::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

impl num_traits::One for Scalar {
    fn one() -> Self {
        Scalar::new(1.0)
    }
}

#[cfg(test)]
#[path = "scalar_test.rs"]
mod tests;
