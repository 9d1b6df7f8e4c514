//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation lives in its own file and provides two halves:
//!
//! - an `xxx_op` function computing the forward value and recording a new node
//!   (operands plus a [`BackwardOp`](crate::autograd::BackwardOp) tag);
//! - an `xxx_backward` function with the local gradient rule, dispatched to by
//!   [`BackwardOp::backward`](crate::autograd::BackwardOp::backward).
//!
//! Binary `_op` functions take `impl Into<Scalar>` on both sides, so raw `f64`
//! operands are wrapped into leaves at the boundary. The same holds for the
//! operator overloads in [`overloads`].
//!
//! Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: relu, sigmoid, tanh.
//! - [`math_elem`]: exp, ln.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod overloads;

pub use activation::{relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, ln_op};
