use crate::optim::lr_scheduler::LrSchedule;
use crate::optim::Optimizer;
use crate::parameter::Parameter;
use log::{debug, warn};
use scalograd_core::ScalogradError;

/// Hyperparameters of [`Sgd`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdConfig {
    pub learning_rate: f64,
    pub schedule: LrSchedule,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            learning_rate: 0.1,
            schedule: LrSchedule::Constant,
        }
    }
}

/// Implements plain stochastic gradient descent.
///
/// Updates parameters `p` according to the rule:
/// `p = p - lr * grad(p)`
///
/// Graph nodes are immutable, so an update installs a fresh leaf in each
/// [`Parameter`]; the next forward pass reads the new values.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Parameter>,
    config: SgdConfig,
    steps: usize,
}

impl Sgd {
    /// # Errors
    /// `ScalogradError::InvalidHyperparameter` for a non-positive or
    /// non-finite learning rate, or an invalid schedule.
    pub fn new(params: Vec<Parameter>, config: SgdConfig) -> Result<Self, ScalogradError> {
        if !(config.learning_rate.is_finite() && config.learning_rate > 0.0) {
            return Err(ScalogradError::InvalidHyperparameter {
                name: "learning_rate".to_string(),
                reason: format!("must be positive and finite, got {}", config.learning_rate),
            });
        }
        config.schedule.validate()?;
        debug!(
            "Sgd: {} parameters, lr={}, schedule={:?}",
            params.len(),
            config.learning_rate,
            config.schedule
        );
        Ok(Sgd {
            params,
            config,
            steps: 0,
        })
    }

    /// Learning rate the next call to `step` will use.
    pub fn learning_rate(&self) -> f64 {
        self.config
            .schedule
            .learning_rate(self.config.learning_rate, self.steps)
    }

    /// Number of completed steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) {
        let lr = self.learning_rate();
        for (i, param) in self.params.iter().enumerate() {
            let grad = param.grad();
            if !grad.is_finite() {
                warn!("Sgd: skipping parameter {} with non-finite gradient {}", i, grad);
                continue;
            }
            param.set_value(param.value() - lr * grad);
        }
        self.steps += 1;
        debug!("Sgd: step {} done with lr={}", self.steps, lr);
    }

    fn zero_grad(&self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
