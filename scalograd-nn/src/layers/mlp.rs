use crate::layers::layer::Layer;
use crate::module::Module;
use crate::parameter::Parameter;
use log::debug;
use rand::Rng;
use scalograd_core::{Scalar, ScalogradError};
use std::fmt;

/// Feed-forward multi-layer perceptron.
///
/// `Mlp::new(2, &[16, 16, 1])` builds a model for 2-dimensional inputs with
/// two hidden layers of 16 ReLU units and one linear output unit. Every layer
/// but the last is non-linear.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    pub fn new(num_inputs: usize, layer_sizes: &[usize]) -> Result<Self, ScalogradError> {
        Mlp::with_rng(num_inputs, layer_sizes, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        num_inputs: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalogradError> {
        if num_inputs == 0 {
            return Err(ScalogradError::InvalidArchitecture(
                "input size must be positive".to_string(),
            ));
        }
        if layer_sizes.is_empty() {
            return Err(ScalogradError::InvalidArchitecture(
                "at least one layer size is required".to_string(),
            ));
        }
        if let Some(i) = layer_sizes.iter().position(|&n| n == 0) {
            return Err(ScalogradError::InvalidArchitecture(format!(
                "layer {} has zero units",
                i
            )));
        }

        let last = layer_sizes.len() - 1;
        let mut fan_in = num_inputs;
        let mut layers = Vec::with_capacity(layer_sizes.len());
        for (i, &size) in layer_sizes.iter().enumerate() {
            layers.push(Layer::with_rng(fan_in, size, i != last, rng));
            fan_in = size;
        }
        let mlp = Mlp { layers };
        debug!("Mlp: built {} with {} parameters", mlp, mlp.num_parameters());
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn num_inputs(&self) -> usize {
        self.layers[0].num_inputs()
    }

    pub fn num_outputs(&self) -> usize {
        self.layers[self.layers.len() - 1].num_outputs()
    }

    /// Convenience forward pass over raw numbers.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<Scalar>, ScalogradError> {
        self.forward(&Scalar::from_slice(input))
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Scalar]) -> Result<Vec<Scalar>, ScalogradError> {
        let mut activations = input.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "Mlp([{}])", layers.join(","))
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
