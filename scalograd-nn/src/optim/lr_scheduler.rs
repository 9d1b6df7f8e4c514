use scalograd_core::ScalogradError;

/// How the learning rate evolves with the number of completed steps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LrSchedule {
    #[default]
    Constant,
    /// Decays linearly from the base rate to `base * final_fraction` over
    /// `total_steps`, then stays there.
    Linear {
        final_fraction: f64,
        total_steps: usize,
    },
}

impl LrSchedule {
    /// Learning rate to use for step `step` (zero-based).
    pub fn learning_rate(&self, base: f64, step: usize) -> f64 {
        match *self {
            LrSchedule::Constant => base,
            LrSchedule::Linear {
                final_fraction,
                total_steps,
            } => {
                let progress = step.min(total_steps) as f64 / total_steps as f64;
                base * (1.0 - (1.0 - final_fraction) * progress)
            }
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ScalogradError> {
        if let LrSchedule::Linear {
            final_fraction,
            total_steps,
        } = *self
        {
            if total_steps == 0 {
                return Err(ScalogradError::InvalidHyperparameter {
                    name: "total_steps".to_string(),
                    reason: "must be positive".to_string(),
                });
            }
            if !(0.0..=1.0).contains(&final_fraction) {
                return Err(ScalogradError::InvalidHyperparameter {
                    name: "final_fraction".to_string(),
                    reason: format!("must lie in [0, 1], got {}", final_fraction),
                });
            }
        }
        Ok(())
    }
}
