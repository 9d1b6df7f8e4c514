use crate::ops::activation::{relu, sigmoid, tanh};
use crate::ops::arithmetic::{add, div, mul, neg, pow};
use crate::ops::math_elem::{exp, ln};
use std::fmt;

/// Identifies the operation that produced a node, and with it the rule used to
/// push that node's gradient back to its operands.
///
/// The tag carries only what the rule cannot read off the operands (the
/// exponent of `Pow`); operand values are immutable on the graph, so each rule
/// is a pure function of the incoming gradient, the operand values and the
/// node's own forward value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// User-created value; no operands, no-op rule.
    Leaf,
    /// operands[0] + operands[1]
    Add,
    /// operands[0] * operands[1]
    Mul,
    /// -operands[0]
    Neg,
    /// operands[0] / operands[1]
    Div,
    /// operands[0] ^ exponent, exponent not differentiated
    Pow { exponent: f64 },
    /// max(0, operands[0])
    Relu,
    /// 1 / (1 + e^-operands[0])
    Sigmoid,
    /// tanh(operands[0])
    Tanh,
    /// e^operands[0]
    Exp,
    /// ln(operands[0])
    Ln,
}

impl BackwardOp {
    /// Number of operands a node with this tag holds.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Leaf => 0,
            BackwardOp::Add | BackwardOp::Mul | BackwardOp::Div => 2,
            BackwardOp::Neg
            | BackwardOp::Pow { .. }
            | BackwardOp::Relu
            | BackwardOp::Sigmoid
            | BackwardOp::Tanh
            | BackwardOp::Exp
            | BackwardOp::Ln => 1,
        }
    }

    /// Computes the contribution of `grad_output` (dRoot/dNode) to each operand.
    ///
    /// # Arguments
    /// * `grad_output`: the node's fully accumulated gradient.
    /// * `inputs`: forward values of the operands, in operand order.
    /// * `output`: the node's own forward value.
    ///
    /// # Returns
    /// One entry per operand, in operand order, to be *added* to that operand's
    /// gradient. Empty for a leaf.
    pub fn backward(&self, grad_output: f64, inputs: &[f64], output: f64) -> Vec<f64> {
        debug_assert_eq!(inputs.len(), self.arity(), "operand count for {self:?}");
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add => add::add_backward(grad_output).to_vec(),
            BackwardOp::Mul => mul::mul_backward(grad_output, inputs[0], inputs[1]).to_vec(),
            BackwardOp::Neg => vec![neg::neg_backward(grad_output)],
            BackwardOp::Div => div::div_backward(grad_output, inputs[0], inputs[1]).to_vec(),
            BackwardOp::Pow { exponent } => {
                vec![pow::pow_backward(grad_output, inputs[0], exponent)]
            }
            BackwardOp::Relu => vec![relu::relu_backward(grad_output, inputs[0])],
            BackwardOp::Sigmoid => vec![sigmoid::sigmoid_backward(grad_output, output)],
            BackwardOp::Tanh => vec![tanh::tanh_backward(grad_output, output)],
            BackwardOp::Exp => vec![exp::exp_backward(grad_output, output)],
            BackwardOp::Ln => vec![ln::ln_backward(grad_output, inputs[0])],
        }
    }
}

impl fmt::Display for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackwardOp::Leaf => write!(f, "input"),
            BackwardOp::Add => write!(f, "+"),
            BackwardOp::Mul => write!(f, "*"),
            BackwardOp::Neg => write!(f, "neg"),
            BackwardOp::Div => write!(f, "/"),
            BackwardOp::Pow { exponent } => write!(f, "^{exponent}"),
            BackwardOp::Relu => write!(f, "relu"),
            BackwardOp::Sigmoid => write!(f, "sigmoid"),
            BackwardOp::Tanh => write!(f, "tanh"),
            BackwardOp::Exp => write!(f, "exp"),
            BackwardOp::Ln => write!(f, "ln"),
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
