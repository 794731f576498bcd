use ndarray::{ArrayD, Axis};

use crate::error::NodeGradError;
use crate::tensor::broadcast_utils::broadcast_view;
use crate::tensor::utils::validate_axis;

/// Sums `array` over `axis`, or over every element when `axis` is `None`.
///
/// With `keep_dims` the reduced axes remain as size-1 axes.
pub(crate) fn reduce_sum(
    array: &ArrayD<f32>,
    axis: Option<usize>,
    keep_dims: bool,
) -> Result<ArrayD<f32>, NodeGradError> {
    match axis {
        Some(axis) => {
            validate_axis(axis, array.ndim())?;
            let summed = array.sum_axis(Axis(axis));
            Ok(if keep_dims {
                summed.insert_axis(Axis(axis))
            } else {
                summed
            })
        }
        None => {
            let total = ndarray::arr0(array.sum()).into_dyn();
            if keep_dims {
                let unit_shape = vec![1; array.ndim()];
                total
                    .into_shape(unit_shape)
                    .map_err(|e| NodeGradError::InternalError(format!("sum keep_dims: {}", e)))
            } else {
                Ok(total)
            }
        }
    }
}

/// Number of elements that were folded into each output element.
pub(crate) fn reduced_count(input_shape: &[usize], axis: Option<usize>) -> usize {
    match axis {
        Some(axis) => input_shape[axis],
        None => input_shape.iter().product(),
    }
}

/// Broadcasts the gradient of a reduction back to the input shape,
/// re-inserting the collapsed axis first when it was dropped.
pub(crate) fn expand_reduced_grad(
    grad_output: &ArrayD<f32>,
    input_shape: &[usize],
    axis: Option<usize>,
    keep_dims: bool,
) -> Result<ArrayD<f32>, NodeGradError> {
    match axis {
        Some(axis) if !keep_dims => {
            let restored = grad_output.view().insert_axis(Axis(axis));
            let grad = restored.broadcast(input_shape).ok_or_else(|| NodeGradError::BroadcastError {
                shape1: restored.shape().to_vec(),
                shape2: input_shape.to_vec(),
            })?;
            Ok(grad.to_owned())
        }
        _ => Ok(broadcast_view(grad_output, input_shape)?.to_owned()),
    }
}
