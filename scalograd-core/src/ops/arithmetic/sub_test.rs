use super::*;
use crate::autograd::BackwardOp;
use approx::assert_relative_eq;

#[test]
fn test_sub_forward() {
    let c = sub_op(2.0, 3.0);
    assert_relative_eq!(c.value(), -1.0);
}

#[test]
fn test_sub_is_add_of_negation() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(3.0);
    let c = sub_op(&a, &b);
    assert_eq!(c.op(), BackwardOp::Add);
    assert!(c.operands()[0].ptr_eq(&a));
    let negated = &c.operands()[1];
    assert_eq!(negated.op(), BackwardOp::Neg);
    assert!(negated.operands()[0].ptr_eq(&b));
}

#[test]
fn test_sub_backward() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(3.0);
    let c = sub_op(&a, &b);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_self_is_zero_with_zero_grad() {
    let a = Scalar::new(5.0);
    let c = sub_op(&a, &a);
    assert_eq!(c.value(), 0.0);
    c.backward();
    assert_eq!(a.grad(), 0.0);
}
