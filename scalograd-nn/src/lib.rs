//! # scalograd-nn
//!
//! Small neural-network building blocks composed purely from
//! [`scalograd_core`] operations: every weight is a [`Parameter`] whose
//! current value is a leaf [`Scalar`](scalograd_core::Scalar), every forward
//! pass builds a fresh graph, and [`Sgd`] reads the gradients a backward pass
//! left on the parameters.
//!
//! ```
//! use rand::SeedableRng;
//! use scalograd_core::Scalar;
//! use scalograd_nn::{loss, Mlp, Module, Optimizer, Sgd, SgdConfig};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let model = Mlp::with_rng(2, &[4, 1], &mut rng).unwrap();
//! let mut sgd = Sgd::new(model.parameters(), SgdConfig::default()).unwrap();
//!
//! let output = model.forward(&Scalar::from_slice(&[0.5, -1.0])).unwrap();
//! let loss = loss::mse_loss(&output, &[1.0]).unwrap();
//! model.zero_grad();
//! loss.backward();
//! sgd.step();
//! ```

pub mod data;
pub mod layers;
pub mod loss;
pub mod module;
pub mod optim;
pub mod parameter;

pub use layers::{Layer, Mlp, Neuron};
pub use module::Module;
pub use optim::{LrSchedule, Optimizer, Sgd, SgdConfig};
pub use parameter::Parameter;
