// nodegrad-core/src/ops/view/permute.rs

use ndarray::{ArrayD, IxDyn};

use crate::autograd::backward_op::{BackwardOp, GradFn, InputGrads};
use crate::error::NodeGradError;
use crate::tensor::utils::{inverse_permutation, validate_permutation};
use crate::tensor::Tensor;

fn permuted(array: &ArrayD<f32>, dims: &[usize]) -> ArrayD<f32> {
    array
        .view()
        .permuted_axes(IxDyn(dims))
        .as_standard_layout()
        .into_owned()
}

// --- Backward Operation ---

/// Backward pass structure for `permute`: the gradient is permuted by the
/// inverse permutation.
#[derive(Debug, Clone)]
pub struct PermuteBackward {
    input: Tensor,
    inverse_dims: Vec<usize>,
}

impl BackwardOp for PermuteBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        Ok(vec![Some(permuted(grad_output, &self.inverse_dims))])
    }

    fn inputs(&self) -> Vec<&Tensor> {
        vec![&self.input]
    }
}

// --- Forward Operation ---

/// Reorders the axes of `input`: output axis `i` is input axis `dims[i]`.
///
/// # Errors
/// `NodeGradError::InvalidPermutation` if `dims` is not a permutation of
/// `0..rank`.
pub fn permute_op(input: &Tensor, dims: &[usize]) -> Result<Tensor, NodeGradError> {
    let result = {
        let guard = input.read_data();
        validate_permutation(dims, guard.data.ndim())?;
        permuted(&guard.data, dims)
    };
    Ok(Tensor::from_op(
        result,
        GradFn::Permute(PermuteBackward {
            input: input.clone(),
            inverse_dims: inverse_permutation(dims),
        }),
    ))
}

#[cfg(test)]
#[path = "permute_test.rs"]
mod tests;
