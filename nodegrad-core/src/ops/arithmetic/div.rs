// nodegrad-core/src/ops/arithmetic/div.rs

use ndarray::ArrayD;

use crate::autograd::backward_op::{BackwardOp, GradFn, InputGrads};
use crate::error::NodeGradError;
use crate::ops::apply_binary_op;
use crate::tensor::broadcast_utils::{broadcast_view, reduce_to_shape};
use crate::tensor::Tensor;

// --- Backward Operation ---

/// Backward pass structure for element-wise division.
///
/// For `y = a / b`: `a` receives `reduce(g / b)` and `b` receives
/// `reduce(-a / b^2 * g)`.
#[derive(Debug, Clone)]
pub struct DivBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for DivBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        let a_guard = self.a.read_data();
        let b_guard = self.b.read_data();
        let b_view = broadcast_view(&b_guard.data, grad_output.shape())?;

        let grad_a = if a_guard.requires_grad {
            Some(reduce_to_shape(&(grad_output / &b_view), a_guard.shape())?)
        } else {
            None
        };
        let grad_b = if b_guard.requires_grad {
            let a_view = broadcast_view(&a_guard.data, grad_output.shape())?;
            let mut local = grad_output * &a_view;
            local.zip_mut_with(&b_view, |v, &b| *v = -*v / (b * b));
            Some(reduce_to_shape(&local, b_guard.shape())?)
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

/// Performs element-wise division (`a / b`) with broadcasting.
///
/// Division by zero follows IEEE 754 (`inf` or `NaN`); it is not an error.
///
/// # Errors
/// `NodeGradError::BroadcastError` if the shapes cannot be broadcast together.
pub fn div_op(a: &Tensor, b: &Tensor) -> Result<Tensor, NodeGradError> {
    apply_binary_op(a, b, |x, y| x / y, |a, b| GradFn::Div(DivBackward { a, b }))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
