//! # scalograd-core
//!
//! A scalar-valued reverse-mode automatic differentiation engine. Arithmetic on
//! [`Scalar`] handles records a directed acyclic graph; calling
//! [`Scalar::backward`] on a root propagates d(root)/d(node) into every node
//! that contributed to it.
//!
//! ```
//! use scalograd_core::Scalar;
//!
//! let a = Scalar::new(1.5);
//! let b = Scalar::new(-4.0);
//! let c = a.pow(3.0) / 5.0;
//! let d = &c + b.pow(2.0).relu();
//! d.backward();
//!
//! assert!((d.value() - 16.675).abs() < 1e-12);
//! assert!((a.grad() - 1.35).abs() < 1e-12);
//! assert!((b.grad() - (-8.0)).abs() < 1e-12);
//! ```
//!
//! ## Layout
//!
//! - [`scalar`]: the [`Scalar`] handle (value, accumulated gradient, provenance).
//! - [`ops`]: forward functions (`add_op`, `mul_op`, ...) and operator overloads.
//! - [`autograd`]: the [`BackwardOp`] tag with its gradient rules, the
//!   topological scheduler and finite-difference gradient checking.
//! - [`viz`]: Graphviz DOT export of a finished graph.

pub mod autograd;
pub mod error;
pub mod ops;
pub mod scalar;
pub mod scalar_data;
pub mod viz;

pub use autograd::{BackwardOp, NodeId};
pub use error::ScalogradError;
pub use scalar::{scalar, Scalar};
pub use viz::{to_dot, to_dot_with_options, DotOptions, RankDir};

// Re-export traits implemented by `Scalar`
pub use num_traits;
