// nodegrad-core/src/ops/linalg/matmul.rs

use ndarray::{ArrayD, ArrayView2, Ix2};

use crate::autograd::backward_op::{BackwardOp, GradFn, InputGrads};
use crate::error::NodeGradError;
use crate::tensor::Tensor;

fn as_matrix<'a>(array: &'a ArrayD<f32>, operation: &str) -> Result<ArrayView2<'a, f32>, NodeGradError> {
    array.view().into_dimensionality::<Ix2>().map_err(|_| NodeGradError::DimensionMismatch {
        expected: 2,
        actual: array.ndim(),
        operation: operation.to_string(),
    })
}

// --- Backward Operation ---

/// Backward pass structure for 2-D matrix multiplication.
///
/// For `C = A @ B`: `dA = dC @ B^T` and `dB = A^T @ dC`.
#[derive(Debug, Clone)]
pub struct MatmulBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for MatmulBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        let a_guard = self.a.read_data();
        let b_guard = self.b.read_data();
        let g = as_matrix(grad_output, "matmul backward")?;

        let grad_a = if a_guard.requires_grad {
            let b = as_matrix(&b_guard.data, "matmul backward")?;
            Some(g.dot(&b.t()).into_dyn())
        } else {
            None
        };
        let grad_b = if b_guard.requires_grad {
            let a = as_matrix(&a_guard.data, "matmul backward")?;
            Some(a.t().dot(&g).into_dyn())
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

/// Performs 2-D matrix multiplication `a @ b` of an `[m, k]` and a `[k, n]`
/// tensor, giving `[m, n]`. Batched and broadcasting products are not
/// supported.
///
/// # Errors
/// * `NodeGradError::DimensionMismatch` if either operand is not 2-D.
/// * `NodeGradError::IncompatibleShapes` if the inner dimensions differ.
pub fn matmul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, NodeGradError> {
    let result = {
        let a_guard = a.read_data();
        let b_guard = b.read_data();
        let a_mat = as_matrix(&a_guard.data, "matmul")?;
        let b_mat = as_matrix(&b_guard.data, "matmul")?;
        if a_mat.ncols() != b_mat.nrows() {
            return Err(NodeGradError::IncompatibleShapes {
                shape1: a_guard.shape().to_vec(),
                shape2: b_guard.shape().to_vec(),
                operation: "matmul".to_string(),
            });
        }
        a_mat.dot(&b_mat).into_dyn()
    };
    Ok(Tensor::from_op(
        result,
        GradFn::Matmul(MatmulBackward {
            a: a.clone(),
            b: b.clone(),
        }),
    ))
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
