use approx::assert_relative_eq;
use scalograd_core::autograd::topological_sort;
use scalograd_core::ops::{add_op, div_op, mul_op, pow_op, relu_op};
use scalograd_core::Scalar;

mod common;
use common::init_logger;

#[test]
fn test_add_root_gives_unit_gradients() {
    for (a_val, b_val) in [(1.0, 2.0), (-3.5, 0.0), (1e6, -1e-6)] {
        let a = Scalar::new(a_val);
        let b = Scalar::new(b_val);
        add_op(&a, &b).backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), 1.0);
    }
}

#[test]
fn test_mul_root_gives_swapped_values() {
    for (a_val, b_val) in [(1.0, 2.0), (-3.5, 0.25), (0.0, 7.0)] {
        let a = Scalar::new(a_val);
        let b = Scalar::new(b_val);
        mul_op(&a, &b).backward();
        assert_eq!(a.grad(), b.value());
        assert_eq!(b.grad(), a.value());
    }
}

#[test]
fn test_fan_out_accumulates() {
    let x = Scalar::new(1.75);
    let y = mul_op(&x, &x);
    y.backward();
    assert_eq!(x.grad(), 2.0 * x.value());
}

#[test]
fn test_relu_gradients() {
    let a = Scalar::new(3.0);
    relu_op(&a).backward();
    assert_eq!(a.grad(), 1.0);

    let a = Scalar::new(-2.0);
    relu_op(&a).backward();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_repeated_backward_snapshots_match() {
    init_logger();
    let a = Scalar::new(0.3);
    let b = Scalar::new(-1.1);
    let c = (&a * &b + a.exp()) / (b.pow(2.0) + 1.0);
    let d = &c * &c + &a;

    d.backward();
    let first: Vec<f64> = topological_sort(&d).iter().map(Scalar::grad).collect();
    d.backward();
    let second: Vec<f64> = topological_sort(&d).iter().map(Scalar::grad).collect();
    assert_eq!(first, second);
}

#[test]
fn test_worked_scenario() {
    let a = Scalar::new(1.5);
    let b = Scalar::new(-4.0);
    let c = div_op(pow_op(&a, 3.0), Scalar::new(5.0));
    let relu_input = pow_op(&b, 2.0);
    let d = add_op(&c, relu_op(&relu_input));
    d.backward();

    assert_relative_eq!(c.value(), 0.675, epsilon = 1e-12);
    assert_relative_eq!(relu_input.value(), 16.0);
    assert_relative_eq!(d.value(), 16.675, epsilon = 1e-12);
    assert_relative_eq!(a.grad(), (3.0 * 1.5 * 1.5) / 5.0, epsilon = 1e-12);
    assert_relative_eq!(a.grad(), 1.35, epsilon = 1e-12);
    assert_relative_eq!(b.grad(), -8.0, epsilon = 1e-12);
}

#[test]
fn test_worked_scenario_with_operators() {
    let a = Scalar::new(1.5);
    let b = Scalar::new(-4.0);
    let c = a.pow(3.0) / 5.0;
    let d = &c + b.pow(2.0).relu();
    d.backward();

    assert_relative_eq!(d.value(), 16.675, epsilon = 1e-12);
    assert_relative_eq!(a.grad(), 1.35, epsilon = 1e-12);
    assert_relative_eq!(b.grad(), -8.0, epsilon = 1e-12);
    assert_relative_eq!(c.grad(), 1.0);
}

#[test]
fn test_graph_reused_with_new_root() {
    // A subgraph shared by two roots keeps correct gradients per root.
    let x = Scalar::new(2.0);
    let shared = x.pow(2.0);
    let root1 = &shared * 3.0;
    let root2 = &shared + &x;

    root1.backward();
    assert_relative_eq!(x.grad(), 12.0);
    root2.backward();
    assert_relative_eq!(x.grad(), 5.0);
    root1.backward();
    assert_relative_eq!(x.grad(), 12.0);
}

#[test]
fn test_wide_graph() {
    let xs = Scalar::from_slice(&(0..10_000).map(|i| i as f64).collect::<Vec<_>>());
    let total: Scalar = xs.iter().map(|x| x * x).sum();
    total.backward();
    for x in xs.iter().step_by(997) {
        assert_relative_eq!(x.grad(), 2.0 * x.value());
    }
}
