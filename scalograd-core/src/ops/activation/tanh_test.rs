use super::*;
use approx::assert_relative_eq;

#[test]
fn test_tanh_forward_backward() {
    let x = Scalar::new(0.5);
    let y = x.tanh();
    assert_relative_eq!(y.value(), 0.5f64.tanh());
    y.backward();
    assert_relative_eq!(x.grad(), 1.0 - 0.5f64.tanh().powi(2));
}

#[test]
fn test_tanh_is_odd() {
    assert_relative_eq!(tanh_op(-0.7).value(), -tanh_op(0.7).value());
}
