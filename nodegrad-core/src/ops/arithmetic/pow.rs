// nodegrad-core/src/ops/arithmetic/pow.rs

use std::fmt::Debug;

use ndarray::{ArrayD, Zip};
use num_traits::ToPrimitive;

use crate::autograd::backward_op::{BackwardOp, GradFn, InputGrads};
use crate::error::NodeGradError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

// --- Backward Operation ---

/// Backward pass structure for `a^p` with a constant exponent.
///
/// The input receives `p * a^(p-1) * g`. A zero exponent yields a zero
/// gradient everywhere, including at `a == 0`.
#[derive(Debug, Clone)]
pub struct PowBackward {
    a: Tensor,
    exponent: f32,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        let p = self.exponent;
        let a_guard = self.a.read_data();
        let grad = Zip::from(&a_guard.data)
            .and(grad_output)
            .map_collect(|&x, &g| if p == 0.0 { 0.0 } else { p * x.powf(p - 1.0) * g });
        Ok(vec![Some(grad)])
    }

    fn inputs(&self) -> Vec<&Tensor> {
        vec![&self.a]
    }
}

// --- Forward Operation ---

/// Raises each element of `a` to the constant power `exponent`.
///
/// Accepts any numeric exponent convertible to `f32`.
///
/// # Errors
/// `NodeGradError::InvalidExponent` if the exponent has no finite `f32`
/// representation.
pub fn pow_op<P>(a: &Tensor, exponent: P) -> Result<Tensor, NodeGradError>
where
    P: ToPrimitive + Debug,
{
    let p = match exponent.to_f32() {
        Some(p) if p.is_finite() => p,
        _ => {
            return Err(NodeGradError::InvalidExponent(format!(
                "{:?} is not representable as a finite f32",
                exponent
            )))
        }
    };
    Ok(apply_unary_op(a, |x| x.powf(p), |a| GradFn::Pow(PowBackward { a, exponent: p })))
}

/// Like [`pow_op`], with the exponent given as a one-element tensor.
///
/// The exponent is a constant: no gradient flows into it.
///
/// # Errors
/// `NodeGradError::InvalidExponent` if `exponent` has more than one element
/// or requires grad.
pub fn pow_tensor_op(a: &Tensor, exponent: &Tensor) -> Result<Tensor, NodeGradError> {
    if exponent.requires_grad() {
        return Err(NodeGradError::InvalidExponent(
            "exponent tensor must not require grad".to_string(),
        ));
    }
    let p = exponent.item().map_err(|_| {
        NodeGradError::InvalidExponent(format!(
            "exponent must be a scalar, got a tensor of shape {:?}",
            exponent.shape()
        ))
    })?;
    pow_op(a, p)
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
