use crate::parameter::Parameter;
use scalograd_core::{Scalar, ScalogradError};

/// The base trait for all neural network modules (neurons, layers, models).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, building a new graph over the parameters'
    /// current leaves.
    ///
    /// # Errors
    /// `ScalogradError::InputSizeMismatch` if `input` does not have the
    /// module's expected length.
    fn forward(&self, input: &[Scalar]) -> Result<Vec<Scalar>, ScalogradError>;

    /// All learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<Parameter>;

    /// Clears gradients left by a previous backward pass.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
