use std::cmp::max;

use ndarray::{ArrayD, IxDyn};

use crate::error::NodeGradError;

/// Determines the output shape resulting from broadcasting two input shapes.
///
/// Follows NumPy broadcasting rules:
/// 1. If the shapes have different numbers of dimensions, prepend 1s to the shorter shape.
/// 2. Compare dimensions element-wise from right to left.
/// 3. Dimensions are compatible if they are equal, or one of them is 1.
/// 4. The resulting dimension is the larger one (if one is 1, it's the other dimension).
pub fn broadcast_shapes(shape_a: &[usize], shape_b: &[usize]) -> Result<Vec<usize>, NodeGradError> {
    let rank_a = shape_a.len();
    let rank_b = shape_b.len();
    let max_rank = max(rank_a, rank_b);
    let mut result_shape = vec![0; max_rank];

    for i in 0..max_rank {
        let dim_a = shape_a.get(rank_a.wrapping_sub(1 + i)).copied().unwrap_or(1);
        let dim_b = shape_b.get(rank_b.wrapping_sub(1 + i)).copied().unwrap_or(1);

        result_shape[max_rank - 1 - i] = if dim_a == dim_b || dim_b == 1 {
            dim_a
        } else if dim_a == 1 {
            dim_b
        } else {
            return Err(NodeGradError::BroadcastError {
                shape1: shape_a.to_vec(),
                shape2: shape_b.to_vec(),
            });
        };
    }
    Ok(result_shape)
}

/// Copies `array` into a new standard-layout array of `shape`, reading the
/// elements in logical (row-major) order.
pub(crate) fn reshape_array(array: &ArrayD<f32>, shape: &[usize]) -> Result<ArrayD<f32>, NodeGradError> {
    let numel: usize = shape.iter().product();
    if numel != array.len() {
        return Err(NodeGradError::IncompatibleReshape {
            from: array.shape().to_vec(),
            to: shape.to_vec(),
        });
    }
    ArrayD::from_shape_vec(IxDyn(shape), array.iter().copied().collect())
        .map_err(|e| NodeGradError::InternalError(format!("reshape failed: {}", e)))
}

/// Checks that `axis` addresses one of the `rank` dimensions.
pub(crate) fn validate_axis(axis: usize, rank: usize) -> Result<(), NodeGradError> {
    if axis >= rank {
        return Err(NodeGradError::InvalidAxis { axis, rank });
    }
    Ok(())
}

/// Checks that `dims` is a permutation of `0..rank`.
pub(crate) fn validate_permutation(dims: &[usize], rank: usize) -> Result<(), NodeGradError> {
    let mut seen = vec![false; rank];
    let valid = dims.len() == rank
        && dims.iter().all(|&d| {
            if d >= rank || seen[d] {
                return false;
            }
            seen[d] = true;
            true
        });
    if !valid {
        return Err(NodeGradError::InvalidPermutation {
            dims: dims.to_vec(),
            rank,
        });
    }
    Ok(())
}

/// Inverse of a permutation: `inverse[dims[i]] == i`.
pub(crate) fn inverse_permutation(dims: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; dims.len()];
    for (i, &d) in dims.iter().enumerate() {
        inverse[d] = i;
    }
    inverse
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
