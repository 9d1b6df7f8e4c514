use super::*;
use approx::assert_relative_eq;

#[test]
fn test_svm_max_margin_loss_values() {
    let outputs = Scalar::from_slice(&[2.0, 0.5, -0.5]);
    let losses = svm_max_margin_loss(&outputs, &[1.0, 1.0, 1.0]).unwrap();
    assert_relative_eq!(losses[0].value(), 0.0);
    assert_relative_eq!(losses[1].value(), 0.5);
    assert_relative_eq!(losses[2].value(), 1.5);
}

#[test]
fn test_svm_max_margin_loss_gradient() {
    let outputs = Scalar::from_slice(&[0.5, 3.0]);
    let losses = svm_max_margin_loss(&outputs, &[-1.0, 1.0]).unwrap();
    let total = mean_loss(&losses).unwrap();
    total.backward();
    // Violated margin: d/dy_hat relu(1 + y_hat) / 2 = 0.5.
    assert_relative_eq!(outputs[0].grad(), 0.5);
    // Satisfied margin contributes nothing.
    assert_relative_eq!(outputs[1].grad(), 0.0);
}

#[test]
fn test_mean_loss() {
    let losses = Scalar::from_slice(&[1.0, 2.0, 6.0]);
    let mean = mean_loss(&losses).unwrap();
    assert_relative_eq!(mean.value(), 3.0);
    mean.backward();
    for l in &losses {
        assert_relative_eq!(l.grad(), 1.0 / 3.0);
    }
}

#[test]
fn test_mse_loss_value_and_gradient() {
    let outputs = Scalar::from_slice(&[1.0, 3.0]);
    let loss = mse_loss(&outputs, &[0.0, 1.0]).unwrap();
    assert_relative_eq!(loss.value(), 2.5);
    loss.backward();
    assert_relative_eq!(outputs[0].grad(), 1.0);
    assert_relative_eq!(outputs[1].grad(), 2.0);
}

#[test]
fn test_l2_regularization() {
    let params = vec![Parameter::new(1.0), Parameter::new(-2.0)];
    let reg = l2_regularization(&params, 0.5);
    assert_relative_eq!(reg.value(), 2.5);
    reg.backward();
    assert_relative_eq!(params[0].grad(), 1.0);
    assert_relative_eq!(params[1].grad(), -2.0);

    assert_eq!(l2_regularization(&[], 0.5).value(), 0.0);
}

#[test]
fn test_accuracy() {
    let outputs = Scalar::from_slice(&[0.3, -1.2, 0.0, 2.0]);
    let acc = accuracy(&outputs, &[1.0, -1.0, 1.0, -1.0]).unwrap();
    assert_relative_eq!(acc, 0.5);
}

#[test]
fn test_length_errors() {
    let outputs = Scalar::from_slice(&[1.0, 2.0]);
    assert_eq!(
        mse_loss(&outputs, &[1.0]).unwrap_err(),
        ScalogradError::LengthMismatch {
            operation: "mse_loss".to_string(),
            left: 2,
            right: 1
        }
    );
    assert!(matches!(
        svm_max_margin_loss(&[], &[]),
        Err(ScalogradError::EmptyInput { .. })
    ));
    assert!(mean_loss(&[]).is_err());
    assert!(accuracy(&outputs, &[1.0, 1.0, 1.0]).is_err());
}
