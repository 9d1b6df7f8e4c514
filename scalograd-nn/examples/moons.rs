//! Trains a small MLP on the two-moons dataset.
//!
//! Run with `RUST_LOG=info cargo run -p scalograd-nn --example moons`.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalograd_core::{Scalar, ScalogradError};
use scalograd_nn::data::make_moons;
use scalograd_nn::loss::{accuracy, l2_regularization, mean_loss, svm_max_margin_loss};
use scalograd_nn::{LrSchedule, Mlp, Module, Optimizer, Sgd, SgdConfig};

const STEPS: usize = 100;

fn main() -> Result<(), ScalogradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = StdRng::seed_from_u64(1337);
    let data = make_moons(100, 0.1, &mut rng)?;
    let model = Mlp::with_rng(2, &[16, 16, 1], &mut rng)?;
    info!("{}", model);
    info!("number of parameters: {}", model.num_parameters());

    let mut sgd = Sgd::new(
        model.parameters(),
        SgdConfig {
            learning_rate: 1.0,
            schedule: LrSchedule::Linear {
                final_fraction: 0.1,
                total_steps: STEPS,
            },
        },
    )?;

    for step in 0..STEPS {
        let mut outputs = Vec::with_capacity(data.len());
        for point in &data.inputs {
            let mut out = model.forward(&Scalar::from_slice(point))?;
            outputs.append(&mut out);
        }

        let losses = svm_max_margin_loss(&outputs, &data.labels)?;
        let data_loss = mean_loss(&losses)?;
        let reg_loss = l2_regularization(&model.parameters(), 1e-4);
        let total_loss = data_loss + reg_loss;
        let acc = accuracy(&outputs, &data.labels)?;

        model.zero_grad();
        total_loss.backward();
        let lr = sgd.learning_rate();
        sgd.step();

        if step % 10 == 0 || step == STEPS - 1 {
            info!(
                "step {:>3}: loss {:.4}, accuracy {:.1}%, lr {:.3}",
                step,
                total_loss.value(),
                acc * 100.0,
                lr
            );
        }
    }
    Ok(())
}
