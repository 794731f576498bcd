// nodegrad-core/src/ops/arithmetic/mul.rs

use ndarray::ArrayD;

use crate::autograd::backward_op::{BackwardOp, GradFn, InputGrads};
use crate::error::NodeGradError;
use crate::ops::apply_binary_op;
use crate::tensor::broadcast_utils::{broadcast_view, reduce_to_shape};
use crate::tensor::Tensor;

// --- Backward Operation ---

/// Backward pass structure for element-wise multiplication.
///
/// `a` receives `reduce(b * g)` and `b` receives `reduce(a * g)`. The other
/// operand is read from its input handle, whose data the engine never
/// mutates.
#[derive(Debug, Clone)]
pub struct MulBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        let a_guard = self.a.read_data();
        let b_guard = self.b.read_data();

        let grad_a = if a_guard.requires_grad {
            let b_view = broadcast_view(&b_guard.data, grad_output.shape())?;
            Some(reduce_to_shape(&(grad_output * &b_view), a_guard.shape())?)
        } else {
            None
        };
        let grad_b = if b_guard.requires_grad {
            let a_view = broadcast_view(&a_guard.data, grad_output.shape())?;
            Some(reduce_to_shape(&(grad_output * &a_view), b_guard.shape())?)
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

/// Performs element-wise multiplication (`a * b`) with broadcasting.
///
/// # Errors
/// `NodeGradError::BroadcastError` if the shapes cannot be broadcast together.
pub fn mul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, NodeGradError> {
    apply_binary_op(a, b, |x, y| x * y, |a, b| GradFn::Mul(MulBackward { a, b }))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
