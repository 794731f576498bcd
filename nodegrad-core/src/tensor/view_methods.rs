use crate::error::NodeGradError;
use crate::ops::view::{expand_op, flatten_op, permute_op, reshape_op, squeeze_op, unsqueeze_op};
use crate::tensor::Tensor;

/// Shape operations. Each returns a new node owning its own buffer; the
/// input is never modified.
impl Tensor {
    /// Reshapes to `new_shape`, which must hold the same number of elements.
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Tensor, NodeGradError> {
        reshape_op(self, new_shape)
    }

    pub fn flatten(&self) -> Result<Tensor, NodeGradError> {
        flatten_op(self)
    }

    /// Removes the size-1 axis `axis`, or every size-1 axis when `None`.
    pub fn squeeze(&self, axis: Option<usize>) -> Result<Tensor, NodeGradError> {
        squeeze_op(self, axis)
    }

    /// Inserts a size-1 axis at `axis`.
    pub fn unsqueeze(&self, axis: usize) -> Result<Tensor, NodeGradError> {
        unsqueeze_op(self, axis)
    }

    /// Reorders the axes: output axis `i` is input axis `dims[i]`.
    ///
    /// # Example
    /// ```
    /// use nodegrad_core::Tensor;
    ///
    /// let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
    /// let p = t.permute(&[1, 0]).unwrap();
    /// assert_eq!(p.shape(), vec![3, 2]);
    /// ```
    pub fn permute(&self, dims: &[usize]) -> Result<Tensor, NodeGradError> {
        permute_op(self, dims)
    }

    /// Broadcasts to `shape` following NumPy rules.
    pub fn expand(&self, shape: &[usize]) -> Result<Tensor, NodeGradError> {
        expand_op(self, shape)
    }
}
