// nodegrad-core/src/ops/view/reshape.rs

use ndarray::ArrayD;

use crate::autograd::backward_op::{BackwardOp, GradFn, InputGrads};
use crate::error::NodeGradError;
use crate::tensor::utils::reshape_array;
use crate::tensor::Tensor;

// --- Backward Operation ---

/// Backward pass shared by every operation that only reinterprets the shape
/// (reshape, flatten, squeeze, unsqueeze): the gradient is reshaped back to
/// the input shape.
#[derive(Debug, Clone)]
pub struct ReshapeBackward {
    input: Tensor,
    input_shape: Vec<usize>,
    name: &'static str,
}

impl ReshapeBackward {
    /// Name of the forward operation this rule belongs to.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl BackwardOp for ReshapeBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        Ok(vec![Some(reshape_array(grad_output, &self.input_shape)?)])
    }

    fn inputs(&self) -> Vec<&Tensor> {
        vec![&self.input]
    }
}

/// Copies `input` into `new_shape`, recording a reshape-style backward rule
/// under `name`.
pub(crate) fn reshape_with_name(
    input: &Tensor,
    new_shape: &[usize],
    name: &'static str,
) -> Result<Tensor, NodeGradError> {
    let (result, input_shape) = {
        let guard = input.read_data();
        (reshape_array(&guard.data, new_shape)?, guard.shape().to_vec())
    };
    Ok(Tensor::from_op(
        result,
        GradFn::Reshape(ReshapeBackward {
            input: input.clone(),
            input_shape,
            name,
        }),
    ))
}

// --- Forward Operations ---

/// Reinterprets `input` with `new_shape`, keeping the row-major element order.
///
/// # Errors
/// `NodeGradError::IncompatibleReshape` if the element counts differ.
pub fn reshape_op(input: &Tensor, new_shape: &[usize]) -> Result<Tensor, NodeGradError> {
    reshape_with_name(input, new_shape, "ReshapeBackward")
}

/// Collapses `input` into a 1-D tensor of `numel` elements.
pub fn flatten_op(input: &Tensor) -> Result<Tensor, NodeGradError> {
    let numel = input.numel();
    reshape_with_name(input, &[numel], "FlattenBackward")
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
