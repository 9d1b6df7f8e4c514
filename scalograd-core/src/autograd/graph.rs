use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;
use log::{debug, trace};
use std::collections::HashSet;
use std::rc::Rc;

/// Identity of a graph node: the address of its shared payload.
///
/// Stable for as long as any handle to the node is alive, which the scheduler
/// guarantees for the duration of a pass by holding every visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(*const ScalarData);

impl NodeId {
    pub(crate) fn of(scalar: &Scalar) -> Self {
        NodeId(Rc::as_ptr(&scalar.data))
    }
}

/// Lists every node reachable from `root` exactly once, operands before the
/// nodes that consume them (post-order). `root` is always last.
///
/// Uses an explicit work stack, so graph depth is limited by heap rather than
/// call-stack size. Visited nodes are keyed by [`NodeId`]: two distinct nodes
/// with equal values are both kept.
pub fn topological_sort(root: &Scalar) -> Vec<Scalar> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Scalar> = Vec::new();
    // (node, operands_done)
    let mut stack: Vec<(Scalar, bool)> = vec![(root.clone(), false)];

    while let Some((node, operands_done)) = stack.pop() {
        if operands_done {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        stack.push((node.clone(), true));
        // Reversed so the first operand is emitted first.
        for operand in node.operands().iter().rev() {
            if !visited.contains(&operand.id()) {
                stack.push((operand.clone(), false));
            }
        }
    }

    sorted_list
}

/// Runs a full reverse pass from `root`.
///
/// 1. Reset every reachable gradient to 0.0.
/// 2. Seed `root` with 1.0.
/// 3. Walk the topological order backwards, so each node's gradient holds the
///    sum over all of its consumers before its own rule fires.
pub(crate) fn backward(root: &Scalar) {
    let sorted_nodes = topological_sort(root);
    debug!("backward: {} nodes reachable from root", sorted_nodes.len());

    for node in &sorted_nodes {
        node.set_grad(0.0);
    }
    root.set_grad(1.0);

    let mut inputs: Vec<f64> = Vec::with_capacity(2);
    for node in sorted_nodes.iter().rev() {
        let operands = node.operands();
        if operands.is_empty() {
            continue;
        }
        inputs.clear();
        inputs.extend(operands.iter().map(Scalar::value));

        let contributions = node.op().backward(node.grad(), &inputs, node.value());
        trace!(
            "backward: {} value={} grad={} -> {:?}",
            node.op(),
            node.value(),
            node.grad(),
            contributions
        );
        for (operand, delta) in operands.iter().zip(contributions) {
            operand.accumulate_grad(delta);
        }
    }
}

pub(crate) fn zero_grad(root: &Scalar) {
    for node in topological_sort(root) {
        node.set_grad(0.0);
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
