//! Reverse-mode machinery: per-operation gradient rules, the topological
//! scheduler that drives them, and finite-difference gradient checking.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, finite_diff_grad, GradCheckError};
pub use graph::{topological_sort, NodeId};
