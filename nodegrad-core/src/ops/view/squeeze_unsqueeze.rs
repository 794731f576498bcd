// nodegrad-core/src/ops/view/squeeze_unsqueeze.rs

use super::reshape::reshape_with_name;
use crate::error::NodeGradError;
use crate::tensor::utils::validate_axis;
use crate::tensor::Tensor;

/// Removes size-1 axes.
///
/// With `Some(axis)` only that axis is removed and it must have size 1; with
/// `None` every size-1 axis is removed.
///
/// # Errors
/// * `NodeGradError::InvalidAxis` if `axis` is out of range.
/// * `NodeGradError::InvalidSqueeze` if the axis does not have size 1.
pub fn squeeze_op(input: &Tensor, axis: Option<usize>) -> Result<Tensor, NodeGradError> {
    let shape = input.shape();
    let new_shape: Vec<usize> = match axis {
        Some(axis) => {
            validate_axis(axis, shape.len())?;
            if shape[axis] != 1 {
                return Err(NodeGradError::InvalidSqueeze {
                    axis,
                    size: shape[axis],
                });
            }
            shape
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != axis)
                .map(|(_, &d)| d)
                .collect()
        }
        None => shape.iter().copied().filter(|&d| d != 1).collect(),
    };
    reshape_with_name(input, &new_shape, "SqueezeBackward")
}

/// Inserts a size-1 axis at position `axis` (`0..=rank`).
///
/// # Errors
/// `NodeGradError::InvalidAxis` if `axis > rank`.
pub fn unsqueeze_op(input: &Tensor, axis: usize) -> Result<Tensor, NodeGradError> {
    let mut new_shape = input.shape();
    validate_axis(axis, new_shape.len() + 1)?;
    new_shape.insert(axis, 1);
    reshape_with_name(input, &new_shape, "UnsqueezeBackward")
}

#[cfg(test)]
#[path = "squeeze_unsqueeze_test.rs"]
mod tests;
