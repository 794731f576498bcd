use log::debug;
use ndarray::ArrayD;

use crate::autograd::graph::run_backward;
use crate::error::NodeGradError;
use crate::tensor::Tensor;

impl Tensor {
    /// Computes the gradient of this tensor with respect to every tensor it
    /// depends on that requires grad.
    ///
    /// The root's gradient is overwritten with ones of its own shape and the
    /// gradients of intermediate nodes are reset, then every ancestor
    /// accumulates (`+=`) its contribution. Only leaves keep their gradient
    /// across passes: calling it twice on the same graph doubles the leaves'
    /// gradients. Reset them with [`Tensor::zero_grad`] between passes.
    ///
    /// A root that does not require grad makes this a no-op.
    ///
    /// # Example
    /// ```
    /// use nodegrad_core::Tensor;
    ///
    /// let a = Tensor::new(vec![2.0], vec![1]).unwrap().with_requires_grad(true);
    /// let b = Tensor::new(vec![3.0], vec![1]).unwrap().with_requires_grad(true);
    /// let c = &(&a * &b) + &b;
    /// c.backward().unwrap();
    /// assert_eq!(a.grad().as_slice(), Some(&[3.0][..]));
    /// assert_eq!(b.grad().as_slice(), Some(&[3.0][..]));
    /// ```
    pub fn backward(&self) -> Result<(), NodeGradError> {
        if !self.requires_grad() {
            debug!("backward() called on a tensor that does not require grad; nothing to do");
            return Ok(());
        }
        self.write_data().grad.fill(1.0);
        run_backward(self)
    }

    /// Like [`Tensor::backward`], seeding the root's gradient with `seed`.
    ///
    /// # Errors
    /// `NodeGradError::GradientShapeMismatch` if `seed` does not have the
    /// root's shape.
    pub fn backward_with_grad(&self, seed: ArrayD<f32>) -> Result<(), NodeGradError> {
        if !self.requires_grad() {
            debug!("backward_with_grad() called on a tensor that does not require grad; nothing to do");
            return Ok(());
        }
        self.set_grad(seed)?;
        run_backward(self)
    }

    /// Returns a new leaf holding a copy of this tensor's data, cut off from
    /// the graph.
    pub fn detach(&self) -> Tensor {
        Tensor::from_array(self.data())
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
