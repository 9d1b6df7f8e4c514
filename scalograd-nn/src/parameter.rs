use scalograd_core::Scalar;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A learnable value of a model.
///
/// Graph nodes are immutable, so a parameter is a shared, replaceable slot
/// holding the leaf that the *next* forward pass will read. Clones share the
/// slot: the model and the optimizer see the same parameter.
#[derive(Clone)]
pub struct Parameter(Rc<RefCell<Scalar>>);

impl Parameter {
    pub fn new(value: f64) -> Self {
        Parameter(Rc::new(RefCell::new(Scalar::new(value))))
    }

    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.0.borrow().set_label(label);
        self
    }

    /// Handle to the current leaf, for use in a forward computation.
    pub fn scalar(&self) -> Scalar {
        self.0.borrow().clone()
    }

    pub fn value(&self) -> f64 {
        self.0.borrow().value()
    }

    /// Gradient left on the current leaf by the last backward pass.
    pub fn grad(&self) -> f64 {
        self.0.borrow().grad()
    }

    /// Replaces the current leaf with a new one holding `value`.
    ///
    /// Graphs built before the call keep referencing the old leaf; the new
    /// leaf starts with a zero gradient and keeps the label.
    pub fn set_value(&self, value: f64) {
        let mut slot = self.0.borrow_mut();
        let next = Scalar::new(value);
        if let Some(label) = slot.label() {
            next.set_label(label);
        }
        *slot = next;
    }

    pub fn zero_grad(&self) {
        // A leaf reaches only itself.
        self.0.borrow().zero_grad();
    }

    pub fn ptr_eq(&self, other: &Parameter) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0.borrow())
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
