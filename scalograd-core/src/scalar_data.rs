use crate::autograd::BackwardOp;
use crate::scalar::Scalar;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Shared payload behind a [`Scalar`] handle.
///
/// `value`, `op` and `operands` are fixed at construction. Only `grad` changes,
/// and only through the autograd pass or an explicit `zero_grad`.
pub struct ScalarData {
    pub(crate) value: f64,
    pub(crate) grad: Cell<f64>,
    pub(crate) op: BackwardOp,
    pub(crate) operands: Vec<Scalar>,
    pub(crate) label: RefCell<Option<String>>,
}

impl ScalarData {
    pub(crate) fn new(value: f64, op: BackwardOp, operands: Vec<Scalar>) -> Self {
        debug_assert_eq!(op.arity(), operands.len(), "operand count for {op:?}");
        ScalarData {
            value,
            grad: Cell::new(0.0),
            op,
            operands,
            label: RefCell::new(None),
        }
    }
}

impl fmt::Debug for ScalarData {
    // Operands are summarized by count; printing them would walk the whole graph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarData")
            .field("value", &self.value)
            .field("grad", &self.grad.get())
            .field("op", &self.op)
            .field("operands", &self.operands.len())
            .field("label", &self.label.borrow())
            .finish()
    }
}

impl Drop for ScalarData {
    // Unlinks operand chains iteratively so dropping a deep graph cannot
    // exhaust the call stack.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(operand) = pending.pop() {
            if let Ok(mut data) = Rc::try_unwrap(operand.data) {
                pending.append(&mut data.operands);
            }
        }
    }
}
