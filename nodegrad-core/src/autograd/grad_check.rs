use approx::relative_eq;
use ndarray::ArrayD;
use thiserror::Error;

use crate::error::NodeGradError;
use crate::tensor::Tensor;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input tensor at index {input_index}, element index {element_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(NodeGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(NodeGradError),
    #[error("Output gradient has shape {actual:?}, but the function output has shape {expected:?}")]
    OutputGradShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("Gradient check input tensor must be a leaf node (no grad_fn). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Function did not propagate requires_grad correctly.")]
    RequiresGradPropagationError,
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Tensor error during intermediate calculation: {0}")]
    TensorError(NodeGradError),
}

impl From<NodeGradError> for GradCheckError {
    fn from(err: NodeGradError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// Step size and tolerances for [`check_grad`].
///
/// Tensors hold `f32`, so the step cannot be much smaller than `1e-3`
/// without rounding noise dominating the central difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    pub epsilon: f64,
    pub abs_tolerance: f64,
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-3,
            abs_tolerance: 1e-2,
            rel_tolerance: 1e-2,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// The scalar being differentiated is `L = sum(func(inputs) * output_grad)`,
/// so the analytical side is `func(inputs).backward_with_grad(output_grad)`.
/// Every input that requires grad must be a leaf; its gradient is reset
/// before the check.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    output_grad: &ArrayD<f32>,
    config: GradCheckConfig,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, NodeGradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if input.requires_grad() && !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    // --- Analytical gradients ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    if output.shape() != output_grad.shape() {
        return Err(GradCheckError::OutputGradShapeMismatch {
            expected: output.shape(),
            actual: output_grad.shape().to_vec(),
        });
    }
    if inputs.iter().any(Tensor::requires_grad) && !output.requires_grad() {
        return Err(GradCheckError::RequiresGradPropagationError);
    }
    output
        .backward_with_grad(output_grad.clone())
        .map_err(GradCheckError::BackwardPassError)?;

    // --- Numerical gradients ---
    for (i, original_input) in inputs.iter().enumerate() {
        if !original_input.requires_grad() {
            continue;
        }
        let analytical: Vec<f32> = original_input.grad().iter().copied().collect();
        let original_data = original_input.data();

        for (elem_idx, &analytical_grad) in analytical.iter().enumerate() {
            let (loss_plus, x_plus) = perturbed_loss(&func, inputs, i, &original_data, elem_idx, config.epsilon, output_grad)?;
            let (loss_minus, x_minus) = perturbed_loss(&func, inputs, i, &original_data, elem_idx, -config.epsilon, output_grad)?;

            // Use the step actually representable in f32.
            let numerical_grad = (loss_plus - loss_minus) / (x_plus - x_minus);
            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    loss_plus,
                    loss_minus,
                });
            }

            let analytical_grad = analytical_grad as f64;
            if !relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = config.abs_tolerance,
                max_relative = config.rel_tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad,
                    numerical_grad,
                    difference: (analytical_grad - numerical_grad).abs(),
                });
            }
        }
    }

    Ok(())
}

/// Evaluates `func` with element `elem_idx` of input `input_index` shifted by
/// `delta`, returning the weighted loss and the perturbed value as stored.
fn perturbed_loss<F>(
    func: &F,
    inputs: &[Tensor],
    input_index: usize,
    original_data: &ArrayD<f32>,
    elem_idx: usize,
    delta: f64,
    output_grad: &ArrayD<f32>,
) -> Result<(f64, f64), GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, NodeGradError>,
{
    let mut data = original_data.clone();
    let slot = data.iter_mut().nth(elem_idx).ok_or_else(|| {
        NodeGradError::InternalError(format!("element {} out of range", elem_idx))
    })?;
    *slot = (*slot as f64 + delta) as f32;
    let perturbed_value = *slot as f64;

    let mut perturbed_inputs: Vec<Tensor> = inputs.to_vec();
    perturbed_inputs[input_index] = Tensor::from_array(data);

    let output = func(&perturbed_inputs).map_err(GradCheckError::ForwardPassError)?;
    let loss: f64 = output
        .read_data()
        .data()
        .iter()
        .zip(output_grad.iter())
        .map(|(&y, &w)| y as f64 * w as f64)
        .sum();
    Ok((loss, perturbed_value))
}
