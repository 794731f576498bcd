// src/tensor/mod.rs

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use log::warn;
use ndarray::{Array, ArrayD, Dimension, IxDyn};

use crate::autograd::graph::NodeId;
use crate::error::NodeGradError;
use crate::tensor_data::TensorData;
use crate::autograd::GradFn;

mod arithmetic_methods;
mod autograd_methods;
pub mod create;
mod reduction_methods;
mod traits;
mod view_methods;

pub mod broadcast_utils;
pub mod utils;

pub use create::{full, ones, ones_like, randn, randn_with_rng, zeros, zeros_like};

/// A node of the computation graph.
///
/// `Tensor` is a handle around `Rc<RefCell<TensorData>>`:
/// 1.  **Shared Ownership:** cloning a `Tensor` is cheap and yields another
///     handle to the *same* node. Graph identity is the `Rc` pointer, never
///     the values.
/// 2.  **Interior Mutability:** the gradient buffer is updated in place
///     during `backward()` through any handle.
///
/// Every operation evaluates eagerly and records its inputs, so the graph
/// grows as a side effect of ordinary arithmetic.
pub struct Tensor {
    pub(crate) data: Rc<RefCell<TensorData>>,
}

impl Tensor {
    /// Creates a leaf tensor from row-major data and a shape.
    ///
    /// The new tensor does not require grad.
    ///
    /// # Errors
    /// Returns `NodeGradError::TensorCreationError` if the length of `data_vec`
    /// does not match the number of elements described by `shape`.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, NodeGradError> {
        let data_len = data_vec.len();
        let array = ArrayD::from_shape_vec(IxDyn(&shape), data_vec)
            .map_err(|_| NodeGradError::TensorCreationError { data_len, shape })?;
        Ok(Self::from_tensor_data(TensorData::new(array)))
    }

    /// Creates a leaf tensor from any `ndarray` array.
    pub fn from_array<D: Dimension>(array: Array<f32, D>) -> Self {
        let array = array.into_dyn();
        // Keep every buffer in standard layout so reshape-family ops and
        // element indexing agree on the logical order.
        let array = if array.is_standard_layout() {
            array
        } else {
            array.as_standard_layout().into_owned()
        };
        Self::from_tensor_data(TensorData::new(array))
    }

    /// Creates a 0-dimensional leaf tensor.
    pub fn scalar(value: f32) -> Self {
        Self::from_array(ndarray::arr0(value))
    }

    /// Creates a 2-D leaf tensor from nested rows.
    ///
    /// # Errors
    /// Returns `NodeGradError::RaggedData` if the rows do not all have the
    /// same length.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, NodeGradError> {
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(NodeGradError::RaggedData {
                row,
                expected: n_cols,
                actual: bad.len(),
            });
        }
        let n_rows = rows.len();
        Self::new(rows.into_iter().flatten().collect(), vec![n_rows, n_cols])
    }

    /// Builder form of [`Tensor::set_requires_grad`].
    pub fn with_requires_grad(self, requires_grad: bool) -> Self {
        self.write_data().requires_grad = requires_grad;
        self
    }

    pub(crate) fn from_tensor_data(tensor_data: TensorData) -> Self {
        Tensor {
            data: Rc::new(RefCell::new(tensor_data)),
        }
    }

    /// Wraps the output of an operation.
    ///
    /// `requires_grad` is the OR of the inputs' flags and the inputs recorded
    /// in `grad_fn` become the node's predecessors.
    pub(crate) fn from_op(data: ArrayD<f32>, grad_fn: GradFn) -> Self {
        let requires_grad = grad_fn.inputs().iter().any(|t| t.requires_grad());
        let mut tensor_data = TensorData::new(data);
        tensor_data.requires_grad = requires_grad;
        tensor_data.grad_fn = Some(grad_fn);
        Self::from_tensor_data(tensor_data)
    }

    /// Immutable access to the node's storage.
    ///
    /// Panics if a mutable borrow is alive (single-threaded misuse).
    pub fn read_data(&self) -> Ref<'_, TensorData> {
        self.data.borrow()
    }

    /// Mutable access to the node's storage.
    pub fn write_data(&self) -> RefMut<'_, TensorData> {
        self.data.borrow_mut()
    }

    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape().to_vec()
    }

    pub fn ndim(&self) -> usize {
        self.read_data().data.ndim()
    }

    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Returns a copy of the forward value.
    pub fn data(&self) -> ArrayD<f32> {
        self.read_data().data.clone()
    }

    /// Returns a copy of the accumulated gradient.
    pub fn grad(&self) -> ArrayD<f32> {
        self.read_data().grad.clone()
    }

    /// Value of a one-element tensor.
    pub fn item(&self) -> Result<f32, NodeGradError> {
        let guard = self.read_data();
        match guard.data.iter().next() {
            Some(&value) if guard.numel() == 1 => Ok(value),
            _ => Err(NodeGradError::NotAScalar {
                shape: guard.shape().to_vec(),
            }),
        }
    }

    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    pub fn set_requires_grad(&self, requires_grad: bool) {
        let mut guard = self.write_data();
        if requires_grad && guard.grad_fn.is_some() {
            warn!("Setting requires_grad=true on a non-leaf tensor; it will only receive gradients flowing from its own consumers.");
        }
        guard.requires_grad = requires_grad;
    }

    /// Replaces the forward value, e.g. for a parameter update.
    ///
    /// # Errors
    /// `NodeGradError::ShapeMismatch` if the new value has another shape.
    pub fn set_data(&self, data: ArrayD<f32>) -> Result<(), NodeGradError> {
        let mut guard = self.write_data();
        if data.shape() != guard.shape() {
            return Err(NodeGradError::ShapeMismatch {
                expected: guard.shape().to_vec(),
                actual: data.shape().to_vec(),
                operation: "set_data".to_string(),
            });
        }
        guard.data = data;
        Ok(())
    }

    /// Overwrites the gradient buffer.
    pub fn set_grad(&self, grad: ArrayD<f32>) -> Result<(), NodeGradError> {
        let mut guard = self.write_data();
        if grad.shape() != guard.shape() {
            return Err(NodeGradError::GradientShapeMismatch {
                expected: guard.shape().to_vec(),
                actual: grad.shape().to_vec(),
            });
        }
        guard.grad = grad;
        Ok(())
    }

    /// Resets the gradient buffer to zeros of the same shape.
    pub fn zero_grad(&self) {
        self.write_data().grad.fill(0.0);
    }

    /// True for tensors built directly from data rather than by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Name of the backward rule attached to this node, if any.
    pub fn grad_fn_name(&self) -> Option<&'static str> {
        self.read_data().grad_fn.as_ref().map(GradFn::name)
    }

    /// The inputs this node was computed from, in operand order.
    pub fn predecessors(&self) -> Vec<Tensor> {
        self.read_data()
            .grad_fn
            .as_ref()
            .map(|f| f.inputs().into_iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Identity of the underlying node.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// True if both handles refer to the same graph node.
    pub fn ptr_eq(&self, other: &Tensor) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Adds `contribution` into the gradient buffer.
    pub(crate) fn accumulate_grad(&self, contribution: &ArrayD<f32>) -> Result<(), NodeGradError> {
        let mut guard = self.write_data();
        if contribution.shape() != guard.shape() {
            return Err(NodeGradError::GradientShapeMismatch {
                expected: guard.shape().to_vec(),
                actual: contribution.shape().to_vec(),
            });
        }
        guard.grad += contribution;
        Ok(())
    }
}
