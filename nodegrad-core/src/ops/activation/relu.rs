// nodegrad-core/src/ops/activation/relu.rs

use ndarray::{ArrayD, Zip};

use crate::autograd::backward_op::{BackwardOp, GradFn, InputGrads};
use crate::error::NodeGradError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

// --- Backward Operation ---

/// Backward pass structure for ReLU.
///
/// The gradient passes through where the input is strictly positive; the
/// subgradient at exactly 0 is taken to be 0.
#[derive(Debug, Clone)]
pub struct ReluBackward {
    input: Tensor,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        let guard = self.input.read_data();
        let grad = Zip::from(&guard.data)
            .and(grad_output)
            .map_collect(|&x, &g| if x > 0.0 { g } else { 0.0 });
        Ok(vec![Some(grad)])
    }

    fn inputs(&self) -> Vec<&Tensor> {
        vec![&self.input]
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit element-wise: `relu(x) = max(x, 0)`.
///
/// NaN inputs propagate to the output.
pub fn relu_op(input: &Tensor) -> Tensor {
    apply_unary_op(
        input,
        |x| if x.is_nan() { x } else { x.max(0.0) },
        |input| GradFn::Relu(ReluBackward { input }),
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
