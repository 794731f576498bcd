// nodegrad-core/src/ops/arithmetic/sub.rs

use ndarray::ArrayD;

use crate::autograd::backward_op::{BackwardOp, GradFn, InputGrads};
use crate::error::NodeGradError;
use crate::ops::apply_binary_op;
use crate::tensor::broadcast_utils::reduce_to_shape;
use crate::tensor::Tensor;

// --- Backward Operation ---

/// Backward pass structure for element-wise subtraction.
///
/// `a` receives `g`, `b` receives `-g`, both reduced to their input shapes.
#[derive(Debug, Clone)]
pub struct SubBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for SubBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        let grad_a = if self.a.requires_grad() {
            Some(reduce_to_shape(grad_output, &self.a.shape())?)
        } else {
            None
        };
        let grad_b = if self.b.requires_grad() {
            Some(-reduce_to_shape(grad_output, &self.b.shape())?)
        } else {
            None
        };
        Ok(vec![grad_a, grad_b])
    }

    fn inputs(&self) -> Vec<&Tensor> {
        vec![&self.a, &self.b]
    }
}

// --- Forward Operation ---

/// Performs element-wise subtraction (`a - b`) with broadcasting.
///
/// # Errors
/// `NodeGradError::BroadcastError` if the shapes cannot be broadcast together.
pub fn sub_op(a: &Tensor, b: &Tensor) -> Result<Tensor, NodeGradError> {
    apply_binary_op(a, b, |x, y| x - y, |a, b| GradFn::Sub(SubBackward { a, b }))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
