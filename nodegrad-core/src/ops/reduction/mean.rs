// nodegrad-core/src/ops/reduction/mean.rs

use ndarray::ArrayD;

use super::utils::{expand_reduced_grad, reduce_sum, reduced_count};
use crate::autograd::backward_op::{BackwardOp, GradFn, InputGrads};
use crate::error::NodeGradError;
use crate::tensor::Tensor;

/// Backward pass structure for the mean reduction: the sum rule divided by
/// the number of averaged elements.
#[derive(Debug, Clone)]
pub struct MeanBackward {
    input: Tensor,
    input_shape: Vec<usize>,
    axis: Option<usize>,
    keep_dims: bool,
    count: usize,
}

impl BackwardOp for MeanBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        let mut grad = expand_reduced_grad(grad_output, &self.input_shape, self.axis, self.keep_dims)?;
        grad /= self.count as f32;
        Ok(vec![Some(grad)])
    }

    fn inputs(&self) -> Vec<&Tensor> {
        vec![&self.input]
    }
}

/// Arithmetic mean of `input` along `axis`, or of all elements when `axis`
/// is `None`. The divisor is the exact number of reduced elements.
///
/// # Errors
/// `NodeGradError::InvalidAxis` if `axis` is out of range.
pub fn mean_op(input: &Tensor, axis: Option<usize>, keep_dims: bool) -> Result<Tensor, NodeGradError> {
    let (result, input_shape, count) = {
        let guard = input.read_data();
        let mut summed = reduce_sum(&guard.data, axis, keep_dims)?;
        let count = reduced_count(guard.shape(), axis);
        summed /= count as f32;
        (summed, guard.shape().to_vec(), count)
    };
    Ok(Tensor::from_op(
        result,
        GradFn::Mean(MeanBackward {
            input: input.clone(),
            input_shape,
            axis,
            keep_dims,
            count,
        }),
    ))
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
