//! # nodegrad-core
//!
//! A small reverse-mode automatic differentiation engine over dense `f32`
//! arrays.
//!
//! Operations on [`Tensor`]s are evaluated eagerly and record their inputs,
//! so every result knows how it was computed. Calling
//! [`Tensor::backward`] on a result walks that dependency graph once, in
//! reverse topological order, and accumulates the gradient of the result
//! into every upstream tensor that requires grad.
//!
//! ```
//! use nodegrad_core::Tensor;
//!
//! let x = Tensor::new(vec![1.0, -2.0, 3.0], vec![3]).unwrap().with_requires_grad(true);
//! let y = (&x * &x).sum_all().unwrap();
//! y.backward().unwrap();
//! assert_eq!(x.grad().as_slice(), Some(&[2.0, -4.0, 6.0][..]));
//! ```

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod tensor;
pub mod tensor_data;
pub mod utils;

pub use error::{ErrorKind, NodeGradError};
pub use tensor::Tensor;

// Re-export the array and numeric crates that appear in the public API.
pub use ndarray;
pub use num_traits;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NodeGradError>;
