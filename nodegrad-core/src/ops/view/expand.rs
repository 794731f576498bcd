// nodegrad-core/src/ops/view/expand.rs

use ndarray::ArrayD;

use crate::autograd::backward_op::{BackwardOp, GradFn, InputGrads};
use crate::error::NodeGradError;
use crate::tensor::broadcast_utils::{broadcast_view, reduce_to_shape};
use crate::tensor::Tensor;

// --- Backward Operation ---

/// Backward pass structure for `expand`: the gradient is summed back over
/// the replicated positions.
#[derive(Debug, Clone)]
pub struct ExpandBackward {
    input: Tensor,
    input_shape: Vec<usize>,
}

impl BackwardOp for ExpandBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        Ok(vec![Some(reduce_to_shape(grad_output, &self.input_shape)?)])
    }

    fn inputs(&self) -> Vec<&Tensor> {
        vec![&self.input]
    }
}

// --- Forward Operation ---

/// Broadcasts `input` to `shape`, materializing the replicated values.
///
/// # Errors
/// `NodeGradError::BroadcastError` if `input` does not broadcast to `shape`.
pub fn expand_op(input: &Tensor, shape: &[usize]) -> Result<Tensor, NodeGradError> {
    let (result, input_shape) = {
        let guard = input.read_data();
        (broadcast_view(&guard.data, shape)?.to_owned(), guard.shape().to_vec())
    };
    Ok(Tensor::from_op(
        result,
        GradFn::Expand(ExpandBackward {
            input: input.clone(),
            input_shape,
        }),
    ))
}

#[cfg(test)]
#[path = "expand_test.rs"]
mod tests;
