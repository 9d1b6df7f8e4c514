//! DOT format export of a computation graph.
//!
//! The export is read-only: it walks operand edges from a root, never runs a
//! backward pass and never touches gradients. Each node is emitted once even
//! when it is shared by several consumers; it then gets one outgoing edge per
//! distinct consumer.
//!
//! ```
//! use scalograd_core::{to_dot, Scalar};
//!
//! let x = Scalar::new(2.0).with_label("x");
//! let y = &x * &x + 1.0;
//! y.backward();
//!
//! let dot = to_dot(&y);
//! assert!(dot.starts_with("digraph"));
//! assert!(dot.contains("rankdir=BT"));
//! ```
//!
//! Render with Graphviz: `dot -Tpng graph.dot > graph.png`.

use crate::autograd::{topological_sort, NodeId};
use crate::scalar::Scalar;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Write as FmtWrite};

/// Direction in which edges point in the rendered layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    /// Inputs at the bottom, root at the top.
    #[default]
    BottomTop,
    TopBottom,
    LeftRight,
}

impl RankDir {
    fn as_dot(&self) -> &'static str {
        match self {
            RankDir::BottomTop => "BT",
            RankDir::TopBottom => "TB",
            RankDir::LeftRight => "LR",
        }
    }
}

/// Options for DOT export customization.
#[derive(Debug, Clone, PartialEq)]
pub struct DotOptions {
    pub rankdir: RankDir,
    /// Digits after the decimal point for values and gradients.
    pub precision: usize,
    /// Include the accumulated gradient in each node.
    pub show_grad: bool,
    /// Include user labels set with `Scalar::with_label`.
    pub show_labels: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            rankdir: RankDir::BottomTop,
            precision: 4,
            show_grad: true,
            show_labels: true,
        }
    }
}

/// Exports the graph rooted at `root` with default options.
pub fn to_dot(root: &Scalar) -> String {
    to_dot_with_options(root, &DotOptions::default())
}

pub fn to_dot_with_options(root: &Scalar, options: &DotOptions) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail.
    let _ = write_dot(root, &mut output, options);
    output
}

/// Writes the graph rooted at `root` as DOT into any `fmt::Write` sink.
pub fn write_dot<W: FmtWrite>(root: &Scalar, out: &mut W, options: &DotOptions) -> fmt::Result {
    let nodes = topological_sort(root);
    let index: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id(), i))
        .collect();

    writeln!(out, "digraph {{")?;
    writeln!(out, "  rankdir={};", options.rankdir.as_dot())?;
    writeln!(out, "  node [shape=plaintext];")?;

    for (i, node) in nodes.iter().enumerate() {
        writeln!(out, "  n{} [label=<{}>];", i, node_table(node, options))?;
    }

    let mut drawn: HashSet<(usize, usize)> = HashSet::new();
    for (i, node) in nodes.iter().enumerate() {
        for operand in node.operands() {
            // Every operand was emitted by the same traversal.
            let Some(&from) = index.get(&operand.id()) else {
                continue;
            };
            // `x * x` draws a single edge.
            if drawn.insert((from, i)) {
                writeln!(out, "  n{} -> n{};", from, i)?;
            }
        }
    }

    writeln!(out, "}}")
}

fn node_table(node: &Scalar, options: &DotOptions) -> String {
    let p = options.precision;
    let mut rows = String::new();
    if options.show_labels {
        if let Some(label) = node.label() {
            rows.push_str(&format!("<TR><TD><B>{}</B></TD></TR>", escape_html(&label)));
        }
    }
    rows.push_str(&format!("<TR><TD>value = {:.*}</TD></TR>", p, node.value()));
    if options.show_grad {
        rows.push_str(&format!("<TR><TD>grad = {:.*}</TD></TR>", p, node.grad()));
    }
    let op_cell = if node.is_leaf() {
        "<TD BGCOLOR=\"#c9c9c9\"><FONT FACE=\"Courier\" POINT-SIZE=\"12\">input</FONT></TD>"
            .to_string()
    } else {
        format!(
            "<TD BGCOLOR=\"#c2ebff\"><FONT COLOR=\"#004261\" FACE=\"Courier\" POINT-SIZE=\"12\">{}</FONT></TD>",
            escape_html(&node.op().to_string())
        )
    };
    rows.push_str(&format!("<TR>{}</TR>", op_cell));

    format!(
        "<TABLE BORDER=\"0\" CELLBORDER=\"1\" CELLSPACING=\"0\" CELLPADDING=\"5\">{}</TABLE>",
        rows
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "viz_test.rs"]
mod tests;
