// src/tensor/traits.rs

use std::fmt::{self, Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

use ndarray::ArrayD;

use crate::error::NodeGradError;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::tensor::Tensor;

// --- Trait Implementations ---

impl Clone for Tensor {
    /// Shallow clone: the new handle refers to the same graph node, so
    /// gradients accumulated through one handle are visible through the other.
    fn clone(&self) -> Self {
        Tensor {
            data: Rc::clone(&self.data),
        }
    }
}

impl Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let td = self.read_data();
        f.debug_struct("Tensor")
            .field("shape", &td.shape())
            .field("requires_grad", &td.requires_grad)
            .field("grad_fn", &td.grad_fn.as_ref().map(|g| g.name()))
            .field("data", &td.data)
            .finish()
    }
}

impl Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let td = self.read_data();
        write!(f, "Tensor(data={}, grad={})", td.data, td.grad)
    }
}

impl From<f32> for Tensor {
    fn from(value: f32) -> Self {
        Tensor::scalar(value)
    }
}

impl From<ArrayD<f32>> for Tensor {
    fn from(array: ArrayD<f32>) -> Self {
        Tensor::from_array(array)
    }
}

// --- Operator Overloads ---
//
// Operators cannot return a `Result`; they panic with the error the named
// call would have returned.

fn expect_op(result: Result<Tensor, NodeGradError>, op: &str) -> Tensor {
    result.unwrap_or_else(|e| panic!("Tensor {} failed: {}", op, e))
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b> $trait<&'b Tensor> for &'a Tensor {
            type Output = Tensor;
            fn $method(self, rhs: &'b Tensor) -> Tensor {
                expect_op($op_fn(self, rhs), stringify!($method))
            }
        }

        impl $trait<Tensor> for Tensor {
            type Output = Tensor;
            fn $method(self, rhs: Tensor) -> Tensor {
                expect_op($op_fn(&self, &rhs), stringify!($method))
            }
        }

        impl<'b> $trait<&'b Tensor> for Tensor {
            type Output = Tensor;
            fn $method(self, rhs: &'b Tensor) -> Tensor {
                expect_op($op_fn(&self, rhs), stringify!($method))
            }
        }

        impl<'a> $trait<Tensor> for &'a Tensor {
            type Output = Tensor;
            fn $method(self, rhs: Tensor) -> Tensor {
                expect_op($op_fn(self, &rhs), stringify!($method))
            }
        }

        impl<'a> $trait<f32> for &'a Tensor {
            type Output = Tensor;
            fn $method(self, rhs: f32) -> Tensor {
                expect_op($op_fn(self, &Tensor::scalar(rhs)), stringify!($method))
            }
        }

        impl $trait<f32> for Tensor {
            type Output = Tensor;
            fn $method(self, rhs: f32) -> Tensor {
                expect_op($op_fn(&self, &Tensor::scalar(rhs)), stringify!($method))
            }
        }

        impl<'b> $trait<&'b Tensor> for f32 {
            type Output = Tensor;
            fn $method(self, rhs: &'b Tensor) -> Tensor {
                expect_op($op_fn(&Tensor::scalar(self), rhs), stringify!($method))
            }
        }

        impl $trait<Tensor> for f32 {
            type Output = Tensor;
            fn $method(self, rhs: Tensor) -> Tensor {
                expect_op($op_fn(&Tensor::scalar(self), &rhs), stringify!($method))
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op);
impl_binary_operator!(Sub, sub, sub_op);
impl_binary_operator!(Mul, mul, mul_op);
impl_binary_operator!(Div, div, div_op);

impl<'a> Neg for &'a Tensor {
    type Output = Tensor;
    fn neg(self) -> Tensor {
        neg_op(self)
    }
}

impl Neg for Tensor {
    type Output = Tensor;
    fn neg(self) -> Tensor {
        neg_op(&self)
    }
}
