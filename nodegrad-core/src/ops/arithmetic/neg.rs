// nodegrad-core/src/ops/arithmetic/neg.rs

use ndarray::ArrayD;

use crate::autograd::backward_op::{BackwardOp, GradFn, InputGrads};
use crate::error::NodeGradError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Backward pass structure for negation: the input receives `-g`.
#[derive(Debug, Clone)]
pub struct NegBackward {
    a: Tensor,
}

impl BackwardOp for NegBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        Ok(vec![Some(-grad_output)])
    }

    fn inputs(&self) -> Vec<&Tensor> {
        vec![&self.a]
    }
}

/// Element-wise negation (`-a`).
pub fn neg_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, |x| -x, |a| GradFn::Neg(NegBackward { a }))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
