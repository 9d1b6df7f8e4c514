use super::*;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let a = Scalar::new(2.0);
    let c = pow_op(&a, 3.0);
    assert_relative_eq!(c.value(), 8.0);
    assert_eq!(c.op(), BackwardOp::Pow { exponent: 3.0 });
    assert_eq!(c.operands().len(), 1);
}

#[test]
fn test_pow_backward_power_rule() {
    let a = Scalar::new(1.5);
    let c = a.pow(3.0);
    c.backward();
    assert_relative_eq!(a.grad(), 3.0 * 1.5 * 1.5);
}

#[test]
fn test_pow_fractional_and_negative_exponents() {
    let a = Scalar::new(4.0);
    let root = a.pow(0.5);
    assert_relative_eq!(root.value(), 2.0);
    root.backward();
    assert_relative_eq!(a.grad(), 0.25);

    let inv = a.pow(-1.0);
    assert_relative_eq!(inv.value(), 0.25);
    inv.backward();
    assert_relative_eq!(a.grad(), -1.0 / 16.0);
}

#[test]
fn test_pow_zero_base_negative_exponent_is_infinite() {
    let a = Scalar::new(0.0);
    let c = a.pow(-1.0);
    assert!(c.value().is_infinite());
    c.backward();
    assert!(!a.grad().is_finite());
}

#[test]
fn test_pow_negative_base_fractional_exponent_is_nan() {
    let a = Scalar::new(-2.0);
    let c = a.pow(0.5);
    assert!(c.value().is_nan());
    c.backward();
    assert!(a.grad().is_nan());
}

#[test]
fn test_pow_negative_base_integral_exponent() {
    let a = Scalar::new(-4.0);
    let c = a.pow(2.0);
    assert_relative_eq!(c.value(), 16.0);
    c.backward();
    assert_relative_eq!(a.grad(), -8.0);
}
