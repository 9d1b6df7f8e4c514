use super::*;
use approx::assert_relative_eq;

#[test]
fn test_sigmoid_forward() {
    assert_relative_eq!(sigmoid_op(0.0).value(), 0.5);
    assert_relative_eq!(sigmoid_op(2.0).value(), 1.0 / (1.0 + (-2.0f64).exp()));
    assert!(sigmoid_op(-800.0).value() >= 0.0);
}

#[test]
fn test_sigmoid_backward() {
    let x = Scalar::new(0.0);
    let y = x.sigmoid();
    y.backward();
    assert_relative_eq!(x.grad(), 0.25);

    let x = Scalar::new(1.3);
    let y = x.sigmoid();
    y.backward();
    let s = y.value();
    assert_relative_eq!(x.grad(), s * (1.0 - s));
}
