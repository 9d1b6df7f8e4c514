use thiserror::Error;

/// Error type shared by the scalograd crates.
///
/// The engine itself never fails: arithmetic anomalies such as division by
/// zero surface as non-finite values. These variants cover the fallible
/// collaborator APIs (model construction, losses, optimizer configuration).
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalogradError {
    #[error("Input size mismatch: expected {expected} values, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Length mismatch in {operation}: {left} vs {right}")]
    LengthMismatch {
        operation: String,
        left: usize,
        right: usize,
    },

    #[error("{operation} requires at least one element")]
    EmptyInput { operation: String },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Invalid hyperparameter '{name}': {reason}")]
    InvalidHyperparameter { name: String, reason: String },
}
