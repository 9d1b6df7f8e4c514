pub mod lr_scheduler;
pub mod sgd;

pub use lr_scheduler::LrSchedule;
pub use sgd::{Sgd, SgdConfig};

/// Trait for optimization algorithms.
///
/// An optimizer owns handles to the parameters it updates and reads the
/// gradients a backward pass left on them.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update).
    fn step(&mut self);

    /// Clears the gradients of all parameters managed by the optimizer.
    /// Call it before the backward pass, or use `Module::zero_grad`.
    fn zero_grad(&self);
}
