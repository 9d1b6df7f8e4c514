//! `std::ops` implementations for [`Scalar`].
//!
//! Each binary operator is implemented for every combination of `Scalar`,
//! `&Scalar` and `f64`, including reflected forms such as `2.0 * &x`. All of
//! them forward to the corresponding `_op` function, so `a + b` and
//! `add_op(&a, &b)` build identical graphs.

use super::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::scalar::Scalar;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl<'b> $trait<&'b Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &'b Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl<'a> $trait<Scalar> for &'a Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl<'a, 'b> $trait<&'b Scalar> for &'a Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &'b Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl $trait<f64> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl<'a> $trait<f64> for &'a Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl<'b> $trait<&'b Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: &'b Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }
    };
}

// `x += y` rebinds `x` to a new node; the previous node is untouched and may
// still be referenced elsewhere in the graph.
macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<Scalar> for Scalar {
            fn $method(&mut self, rhs: Scalar) {
                *self = $op_fn(&*self, rhs);
            }
        }

        impl<'b> $trait<&'b Scalar> for Scalar {
            fn $method(&mut self, rhs: &'b Scalar) {
                *self = $op_fn(&*self, rhs);
            }
        }

        impl $trait<f64> for Scalar {
            fn $method(&mut self, rhs: f64) {
                *self = $op_fn(&*self, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl_assign_op!(AddAssign, add_assign, add_op);
impl_assign_op!(SubAssign, sub_assign, sub_op);
impl_assign_op!(MulAssign, mul_assign, mul_op);
impl_assign_op!(DivAssign, div_assign, div_op);

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

#[cfg(test)]
#[path = "overloads_test.rs"]
mod tests;
