use std::fmt::Debug;

use ndarray::ArrayD;

use crate::error::NodeGradError;
use crate::ops::activation::relu::ReluBackward;
use crate::ops::arithmetic::add::AddBackward;
use crate::ops::arithmetic::div::DivBackward;
use crate::ops::arithmetic::mul::MulBackward;
use crate::ops::arithmetic::neg::NegBackward;
use crate::ops::arithmetic::pow::PowBackward;
use crate::ops::arithmetic::sub::SubBackward;
use crate::ops::linalg::matmul::MatmulBackward;
use crate::ops::reduction::mean::MeanBackward;
use crate::ops::reduction::sum::SumBackward;
use crate::ops::view::expand::ExpandBackward;
use crate::ops::view::permute::PermuteBackward;
use crate::ops::view::reshape::ReshapeBackward;
use crate::tensor::Tensor;

/// Gradient contribution for each input of an operation, in operand order.
/// `None` means the input does not require grad and nothing is accumulated.
pub type InputGrads = Vec<Option<ArrayD<f32>>>;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Every operation that creates a non-leaf `Tensor` stores a struct
/// implementing this trait (wrapped in [`GradFn`]). The struct keeps the
/// handles of the operation's inputs plus whatever forward-pass constants
/// the vector-Jacobian product needs.
pub trait BackwardOp: Debug {
    /// Computes the vector-Jacobian product of `grad_output` (dL/dOutput)
    /// with the local Jacobian of the operation.
    ///
    /// # Returns
    /// One entry per input, in the order of [`BackwardOp::inputs`]. Each
    /// gradient has exactly the shape of its input: contributions from
    /// broadcast operands are already reduced.
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError>;

    /// The input tensors that participated in the forward operation.
    fn inputs(&self) -> Vec<&Tensor>;
}

/// Tagged backward rule attached to every operation output.
#[derive(Debug, Clone)]
pub enum GradFn {
    Add(AddBackward),
    Sub(SubBackward),
    Neg(NegBackward),
    Mul(MulBackward),
    Div(DivBackward),
    Pow(PowBackward),
    Matmul(MatmulBackward),
    Sum(SumBackward),
    Mean(MeanBackward),
    Relu(ReluBackward),
    Reshape(ReshapeBackward),
    Permute(PermuteBackward),
    Expand(ExpandBackward),
}

impl GradFn {
    fn op(&self) -> &dyn BackwardOp {
        match self {
            GradFn::Add(op) => op,
            GradFn::Sub(op) => op,
            GradFn::Neg(op) => op,
            GradFn::Mul(op) => op,
            GradFn::Div(op) => op,
            GradFn::Pow(op) => op,
            GradFn::Matmul(op) => op,
            GradFn::Sum(op) => op,
            GradFn::Mean(op) => op,
            GradFn::Relu(op) => op,
            GradFn::Reshape(op) => op,
            GradFn::Permute(op) => op,
            GradFn::Expand(op) => op,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GradFn::Add(_) => "AddBackward",
            GradFn::Sub(_) => "SubBackward",
            GradFn::Neg(_) => "NegBackward",
            GradFn::Mul(_) => "MulBackward",
            GradFn::Div(_) => "DivBackward",
            GradFn::Pow(_) => "PowBackward",
            GradFn::Matmul(_) => "MatmulBackward",
            GradFn::Sum(_) => "SumBackward",
            GradFn::Mean(_) => "MeanBackward",
            GradFn::Relu(_) => "ReluBackward",
            GradFn::Reshape(op) => op.name(),
            GradFn::Permute(_) => "PermuteBackward",
            GradFn::Expand(_) => "ExpandBackward",
        }
    }

    pub fn backward(&self, grad_output: &ArrayD<f32>) -> Result<InputGrads, NodeGradError> {
        self.op().backward(grad_output)
    }

    pub fn inputs(&self) -> Vec<&Tensor> {
        self.op().inputs()
    }
}
