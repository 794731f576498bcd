use std::fmt::Debug;

use num_traits::ToPrimitive;

use crate::error::NodeGradError;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, pow_tensor_op, sub_op};
use crate::ops::linalg::matmul_op;
use crate::tensor::Tensor;

/// Named, fallible forms of the arithmetic operations.
///
/// The operator overloads (`+ - * /` and unary `-`) call the same functions
/// but panic on error; these methods return the error instead.
impl Tensor {
    /// Element-wise `self + other` with broadcasting.
    ///
    /// # Example
    /// ```
    /// use nodegrad_core::Tensor;
    ///
    /// let a = Tensor::new(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
    /// let b = Tensor::scalar(10.0);
    /// let c = a.add(&b).unwrap();
    /// assert_eq!(c.data().iter().copied().collect::<Vec<_>>(), vec![11.0, 12.0, 13.0]);
    /// ```
    pub fn add(&self, other: &Tensor) -> Result<Tensor, NodeGradError> {
        add_op(self, other)
    }

    /// Element-wise `self - other` with broadcasting.
    pub fn sub(&self, other: &Tensor) -> Result<Tensor, NodeGradError> {
        sub_op(self, other)
    }

    /// Element-wise `self * other` with broadcasting.
    pub fn mul(&self, other: &Tensor) -> Result<Tensor, NodeGradError> {
        mul_op(self, other)
    }

    /// Element-wise `self / other` with broadcasting.
    pub fn div(&self, other: &Tensor) -> Result<Tensor, NodeGradError> {
        div_op(self, other)
    }

    pub fn neg(&self) -> Tensor {
        neg_op(self)
    }

    /// Raises every element to a constant power.
    ///
    /// Fails with `NodeGradError::InvalidExponent` if `exponent` has no finite
    /// `f32` value.
    pub fn pow<P: ToPrimitive + Debug>(&self, exponent: P) -> Result<Tensor, NodeGradError> {
        pow_op(self, exponent)
    }

    /// Raises every element to the value of a one-element, no-grad tensor.
    pub fn pow_tensor(&self, exponent: &Tensor) -> Result<Tensor, NodeGradError> {
        pow_tensor_op(self, exponent)
    }

    /// 2-D matrix product `self @ other`.
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, NodeGradError> {
        matmul_op(self, other)
    }
}
