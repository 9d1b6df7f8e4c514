use super::*;
use crate::scalar::Scalar;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward_backward() {
    let x = Scalar::new(1.0);
    let y = exp_op(&x);
    assert_relative_eq!(y.value(), std::f64::consts::E);
    y.backward();
    assert_relative_eq!(x.grad(), std::f64::consts::E);
}

#[test]
fn test_ln_forward_backward() {
    let x = Scalar::new(2.0);
    let y = x.ln();
    assert_relative_eq!(y.value(), 2f64.ln());
    y.backward();
    assert_relative_eq!(x.grad(), 0.5);
}

#[test]
fn test_ln_domain() {
    assert!(ln_op(0.0).value().is_infinite());
    assert!(ln_op(-1.0).value().is_nan());
}

#[test]
fn test_exp_ln_round_trip_gradient() {
    // d/dx ln(exp(x)) = 1
    let x = Scalar::new(0.3);
    let y = x.exp().ln();
    assert_relative_eq!(y.value(), 0.3, epsilon = 1e-12);
    y.backward();
    assert_relative_eq!(x.grad(), 1.0, epsilon = 1e-12);
}
