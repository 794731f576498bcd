// src/nn/losses/mse.rs

use log::debug;

use crate::error::NodeGradError;
use crate::tensor::Tensor;

/// Specifies the reduction applied to the element-wise squared errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

/// Mean Squared Error loss: `reduce((input - target)^2)`.
///
/// Built entirely from differentiable tensor operations, so the loss node
/// backpropagates into `input` (and into `target` if it requires grad).
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes the loss as a 0-dimensional tensor.
    ///
    /// # Errors
    /// `NodeGradError::ShapeMismatch` if `input` and `target` differ in shape.
    /// No broadcasting is applied.
    pub fn calculate(&self, input: &Tensor, target: &Tensor) -> Result<Tensor, NodeGradError> {
        let (input_shape, target_shape) = (input.shape(), target.shape());
        if input_shape != target_shape {
            return Err(NodeGradError::ShapeMismatch {
                expected: input_shape,
                actual: target_shape,
                operation: "mse_loss".to_string(),
            });
        }
        let diff = input.sub(target)?;
        let squared = diff.mul(&diff)?;
        let loss = match self.reduction {
            Reduction::Mean => squared.mean_all()?,
            Reduction::Sum => squared.sum_all()?,
        };
        debug!("mse_loss({:?}) over shape {:?}", self.reduction, input.shape());
        Ok(loss)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
