// nodegrad-core/src/ops/reduction/sum.rs

use ndarray::ArrayD;

use super::utils::{expand_reduced_grad, reduce_sum};
use crate::autograd::backward_op::{BackwardOp, GradFn, InputGrads};
use crate::error::NodeGradError;
use crate::tensor::Tensor;

// --- Backward Operation ---

/// Backward pass structure for the sum reduction.
///
/// Every input element contributed once to its output element, so the
/// gradient is `g` broadcast back to the input shape.
#[derive(Debug, Clone)]
pub struct SumBackward {
    input: Tensor,
    input_shape: Vec<usize>,
    axis: Option<usize>,
    keep_dims: bool,
}

impl BackwardOp for SumBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        let grad = expand_reduced_grad(grad_output, &self.input_shape, self.axis, self.keep_dims)?;
        Ok(vec![Some(grad)])
    }

    fn inputs(&self) -> Vec<&Tensor> {
        vec![&self.input]
    }
}

// --- Forward Operation ---

/// Sums the elements of `input` along `axis`, or all elements when `axis`
/// is `None`.
///
/// Without `keep_dims` the reduced axis is removed (a full reduction gives a
/// 0-dimensional tensor); with it, the axis stays with size 1.
///
/// # Errors
/// `NodeGradError::InvalidAxis` if `axis` is out of range.
pub fn sum_op(input: &Tensor, axis: Option<usize>, keep_dims: bool) -> Result<Tensor, NodeGradError> {
    let (result, input_shape) = {
        let guard = input.read_data();
        (reduce_sum(&guard.data, axis, keep_dims)?, guard.shape().to_vec())
    };
    Ok(Tensor::from_op(
        result,
        GradFn::Sum(SumBackward {
            input: input.clone(),
            input_shape,
            axis,
            keep_dims,
        }),
    ))
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
