use ndarray::{ArrayD, ArrayViewD, Axis};

use crate::error::NodeGradError;

/// Reduces a gradient to `target_shape` by summing along broadcasted dimensions.
///
/// This inverts NumPy-style broadcasting: an input that was replicated during
/// the forward pass receives the sum of the gradient over every replicated
/// position.
///
/// 1. A gradient with fewer axes than the target (typically a 0-d scalar) is
///    first replicated up to `target_shape`.
/// 2. Leading axes the target does not have are summed away.
/// 3. Every axis where the target has size 1 but the gradient does not is
///    summed, keeping a size-1 axis.
///
/// Pure: `grad` is never modified.
pub fn reduce_to_shape(grad: &ArrayD<f32>, target_shape: &[usize]) -> Result<ArrayD<f32>, NodeGradError> {
    if grad.shape() == target_shape {
        return Ok(grad.clone());
    }

    let mismatch = || NodeGradError::BroadcastError {
        shape1: grad.shape().to_vec(),
        shape2: target_shape.to_vec(),
    };

    let mut reduced = if grad.ndim() < target_shape.len() {
        grad.broadcast(target_shape).ok_or_else(mismatch)?.to_owned()
    } else {
        grad.clone()
    };

    while reduced.ndim() > target_shape.len() {
        reduced = reduced.sum_axis(Axis(0));
    }

    for (axis, &dim) in target_shape.iter().enumerate() {
        if dim == 1 && reduced.shape()[axis] != 1 {
            reduced = reduced.sum_axis(Axis(axis)).insert_axis(Axis(axis));
        }
    }

    if reduced.shape() != target_shape {
        return Err(mismatch());
    }
    Ok(reduced)
}

/// Broadcasts `array` to `shape` without copying.
pub(crate) fn broadcast_view<'a>(
    array: &'a ArrayD<f32>,
    shape: &[usize],
) -> Result<ArrayViewD<'a, f32>, NodeGradError> {
    array.broadcast(shape).ok_or_else(|| NodeGradError::BroadcastError {
        shape1: array.shape().to_vec(),
        shape2: shape.to_vec(),
    })
}

#[cfg(test)]
#[path = "broadcast_utils_test.rs"]
mod tests;
