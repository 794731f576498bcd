use crate::error::NodeGradError;
use crate::ops::activation::relu_op;
use crate::ops::reduction::{mean_op, sum_op};
use crate::tensor::Tensor;

impl Tensor {
    /// Sums along `axis`; see [`sum_op`].
    pub fn sum(&self, axis: Option<usize>, keep_dims: bool) -> Result<Tensor, NodeGradError> {
        sum_op(self, axis, keep_dims)
    }

    /// Sum of all elements as a 0-dimensional tensor.
    pub fn sum_all(&self) -> Result<Tensor, NodeGradError> {
        sum_op(self, None, false)
    }

    /// Mean along `axis`; see [`mean_op`].
    pub fn mean(&self, axis: Option<usize>, keep_dims: bool) -> Result<Tensor, NodeGradError> {
        mean_op(self, axis, keep_dims)
    }

    /// Mean of all elements as a 0-dimensional tensor.
    pub fn mean_all(&self) -> Result<Tensor, NodeGradError> {
        mean_op(self, None, false)
    }

    pub fn relu(&self) -> Tensor {
        relu_op(self)
    }
}
