// src/tensor_data.rs
use ndarray::{ArrayD, ArrayViewMutD};

use crate::autograd::GradFn;

/// Internal storage and autograd metadata for a Tensor.
///
/// Wrapped in `Rc<RefCell<TensorData>>` by [`Tensor`](crate::Tensor), so that
/// every handle to the same node observes the same gradient buffer.
#[derive(Debug)]
pub struct TensorData {
    /// Forward value. The engine never writes it after construction.
    pub(crate) data: ArrayD<f32>,
    /// Accumulated gradient, always shaped like `data`.
    pub(crate) grad: ArrayD<f32>,
    /// If false, the backward pass neither accumulates into this node nor
    /// propagates through it.
    pub(crate) requires_grad: bool,
    /// Backward rule of the operation that produced this node, holding its
    /// inputs (the predecessors). Leaves have `grad_fn = None`.
    pub(crate) grad_fn: Option<GradFn>,
}

impl TensorData {
    /// Creates leaf data with a zero gradient of the same shape.
    pub fn new(data: ArrayD<f32>) -> Self {
        let grad = ArrayD::zeros(data.raw_dim());
        TensorData {
            data,
            grad,
            requires_grad: false,
            grad_fn: None,
        }
    }

    pub fn data(&self) -> &ArrayD<f32> {
        &self.data
    }

    pub fn grad(&self) -> &ArrayD<f32> {
        &self.grad
    }

    /// Mutable view over the values. A view cannot change the shape, which
    /// keeps `grad` and `data` aligned.
    pub fn data_view_mut(&mut self) -> ArrayViewMutD<'_, f32> {
        self.data.view_mut()
    }

    pub fn grad_view_mut(&mut self) -> ArrayViewMutD<'_, f32> {
        self.grad.view_mut()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    pub fn grad_fn(&self) -> Option<&GradFn> {
        self.grad_fn.as_ref()
    }
}
