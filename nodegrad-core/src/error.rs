use thiserror::Error;

/// Broad classification of a [`NodeGradError`].
///
/// Shape errors cover every operand or construction input whose shape is not
/// acceptable for the requested operation. Type errors are raised when an
/// argument has the right shape but the wrong nature (a `pow` exponent that is
/// not a constant scalar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Shape,
    Type,
    Internal,
}

/// Custom error type for the nodegrad engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NodeGradError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Incompatible shapes for operation {operation}: {shape1:?} and {shape2:?}")]
    IncompatibleShapes {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
        operation: String,
    },

    #[error("Dimension mismatch in {operation}: expected rank {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid axis {axis} for tensor of rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    #[error("Invalid permutation: dims {dims:?} are not a valid permutation for rank {rank}")]
    InvalidPermutation { dims: Vec<usize>, rank: usize },

    #[error("Cannot squeeze axis {axis} of size {size}")]
    InvalidSqueeze { axis: usize, size: usize },

    #[error("Cannot reshape tensor of shape {from:?} into shape {to:?}")]
    IncompatibleReshape { from: Vec<usize>, to: Vec<usize> },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Ragged input: row {row} has {actual} elements, expected {expected}")]
    RaggedData {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Expected a tensor with exactly one element, got shape {shape:?}")]
    NotAScalar { shape: Vec<usize> },

    #[error("Gradient shape mismatch: expected {expected:?}, got {actual:?}")]
    GradientShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Invalid exponent for pow: {0}")]
    InvalidExponent(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl NodeGradError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NodeGradError::InvalidExponent(_) => ErrorKind::Type,
            NodeGradError::InternalError(_) => ErrorKind::Internal,
            _ => ErrorKind::Shape,
        }
    }

    pub fn is_shape_error(&self) -> bool {
        self.kind() == ErrorKind::Shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let shape_err = NodeGradError::IncompatibleShapes {
            shape1: vec![2, 3],
            shape2: vec![2, 3],
            operation: "matmul".to_string(),
        };
        assert_eq!(shape_err.kind(), ErrorKind::Shape);
        assert!(shape_err.is_shape_error());

        let type_err = NodeGradError::InvalidExponent("exponent requires grad".to_string());
        assert_eq!(type_err.kind(), ErrorKind::Type);
        assert!(!type_err.is_shape_error());

        let internal = NodeGradError::InternalError("boom".to_string());
        assert_eq!(internal.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_error_messages() {
        let err = NodeGradError::RaggedData { row: 1, expected: 2, actual: 3 };
        assert_eq!(err.to_string(), "Ragged input: row 1 has 3 elements, expected 2");
    }
}
