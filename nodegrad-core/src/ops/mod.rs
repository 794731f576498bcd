//! # Tensor Operations Module (`ops`)
//!
//! Every differentiable operation of the engine lives here, grouped by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (named `xxx_op`)
//!   that validates its operands, computes the forward value eagerly and
//!   attaches the backward rule to the output. The `Tensor` methods and the
//!   operator overloads are thin wrappers around them.
//! - **`Backward` Structs:** Each operation has a corresponding struct (e.g.
//!   `AddBackward`, `MatmulBackward`) implementing
//!   [`BackwardOp`](crate::autograd::BackwardOp). It keeps handles to the
//!   inputs plus the forward-pass constants needed for the vector-Jacobian
//!   product, and is stored on the output as a [`GradFn`] variant.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: Broadcasting element-wise arithmetic (add, sub, mul, div, neg, pow).
//! - [`linalg`]: Matrix multiplication.
//! - [`reduction`]: Sum and mean, over all elements or one axis.
//! - [`activation`]: ReLU.
//! - [`view`]: Shape operations (reshape, flatten, squeeze, unsqueeze, permute, expand).

use ndarray::{ArrayD, Zip};

use crate::autograd::GradFn;
use crate::error::NodeGradError;
use crate::tensor::broadcast_utils::broadcast_view;
use crate::tensor::utils::broadcast_shapes;
use crate::tensor::Tensor;

pub mod activation;
pub mod arithmetic;
pub mod linalg;
pub mod reduction;
pub mod view;

/// Applies a broadcasting binary element-wise operation.
///
/// Computes the broadcast shape of `a` and `b`, evaluates `op` over the
/// broadcast operands and wraps the result with the backward rule produced
/// by `build_grad_fn`.
///
/// # Errors
/// `NodeGradError::BroadcastError` if the shapes are not broadcast-compatible.
pub(crate) fn apply_binary_op<F, B>(
    a: &Tensor,
    b: &Tensor,
    op: F,
    build_grad_fn: B,
) -> Result<Tensor, NodeGradError>
where
    F: Fn(f32, f32) -> f32,
    B: FnOnce(Tensor, Tensor) -> GradFn,
{
    let result = {
        let a_guard = a.read_data();
        let b_guard = b.read_data();
        let output_shape = broadcast_shapes(a_guard.shape(), b_guard.shape())?;
        let a_view = broadcast_view(&a_guard.data, &output_shape)?;
        let b_view = broadcast_view(&b_guard.data, &output_shape)?;
        Zip::from(&a_view).and(&b_view).map_collect(|&x, &y| op(x, y))
    };
    Ok(Tensor::from_op(result, build_grad_fn(a.clone(), b.clone())))
}

/// Applies a unary element-wise operation.
pub(crate) fn apply_unary_op<F, B>(a: &Tensor, op: F, build_grad_fn: B) -> Tensor
where
    F: Fn(f32) -> f32,
    B: FnOnce(Tensor) -> GradFn,
{
    let result: ArrayD<f32> = a.read_data().data.mapv(op);
    Tensor::from_op(result, build_grad_fn(a.clone()))
}
