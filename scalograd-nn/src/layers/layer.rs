use crate::layers::neuron::Neuron;
use crate::module::Module;
use crate::parameter::Parameter;
use rand::Rng;
use scalograd_core::{Scalar, ScalogradError};
use std::fmt;

/// A fully connected layer: `num_outputs` neurons reading the same input.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    num_inputs: usize,
}

impl Layer {
    pub fn new(num_inputs: usize, num_outputs: usize, non_linear: bool) -> Self {
        Layer::with_rng(num_inputs, num_outputs, non_linear, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        num_inputs: usize,
        num_outputs: usize,
        non_linear: bool,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..num_outputs)
            .map(|_| Neuron::with_rng(num_inputs, non_linear, rng))
            .collect();
        Layer {
            neurons,
            num_inputs,
        }
    }

    /// Builds a layer from existing neurons, which must share an input size.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalogradError> {
        let num_inputs = match neurons.first() {
            Some(first) => first.num_inputs(),
            None => {
                return Err(ScalogradError::InvalidArchitecture(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        if let Some(odd) = neurons.iter().find(|n| n.num_inputs() != num_inputs) {
            return Err(ScalogradError::InputSizeMismatch {
                expected: num_inputs,
                actual: odd.num_inputs(),
            });
        }
        Ok(Layer {
            neurons,
            num_inputs,
        })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, input: &[Scalar]) -> Result<Vec<Scalar>, ScalogradError> {
        if input.len() != self.num_inputs {
            return Err(ScalogradError::InputSizeMismatch {
                expected: self.num_inputs,
                actual: input.len(),
            });
        }
        self.neurons.iter().map(|n| n.activate(input)).collect()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer([{}])", neurons.join(","))
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
