use crate::module::Module;
use crate::parameter::Parameter;
use rand::Rng;
use scalograd_core::{Scalar, ScalogradError};
use std::fmt;

/// One computational unit: `act(w · x + b)`.
///
/// Weights are drawn uniformly from `[-1, 1)`, the bias starts at zero. With
/// `non_linear` set the activation is ReLU, otherwise the unit is linear.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    non_linear: bool,
}

impl Neuron {
    pub fn new(num_inputs: usize, non_linear: bool) -> Self {
        Neuron::with_rng(num_inputs, non_linear, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(num_inputs: usize, non_linear: bool, rng: &mut R) -> Self {
        let weights = (0..num_inputs)
            .map(|_| Parameter::new(rng.gen_range(-1.0..1.0)))
            .collect();
        Neuron {
            weights,
            bias: Parameter::new(0.0),
            non_linear,
        }
    }

    /// Builds a neuron from explicit weights and bias.
    pub fn from_weights(weights: &[f64], bias: f64, non_linear: bool) -> Self {
        Neuron {
            weights: weights.iter().copied().map(Parameter::new).collect(),
            bias: Parameter::new(bias),
            non_linear,
        }
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn is_non_linear(&self) -> bool {
        self.non_linear
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Computes the neuron's single output for `input`.
    pub fn activate(&self, input: &[Scalar]) -> Result<Scalar, ScalogradError> {
        if input.len() != self.weights.len() {
            return Err(ScalogradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.scalar(), |acc, (w, x)| acc + w.scalar() * x);
        Ok(if self.non_linear {
            pre_activation.relu()
        } else {
            pre_activation
        })
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Scalar]) -> Result<Vec<Scalar>, ScalogradError> {
        Ok(vec![self.activate(input)?])
    }

    fn parameters(&self) -> Vec<Parameter> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.non_linear { "ReLU" } else { "Linear" };
        write!(f, "{}Neuron({})", kind, self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
