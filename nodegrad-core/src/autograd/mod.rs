//! # Automatic differentiation (`autograd`)
//!
//! - [`backward_op`]: the [`BackwardOp`] trait and the tagged [`GradFn`] enum
//!   every operation output carries.
//! - [`graph`]: topological sort and the reverse sweep behind
//!   [`Tensor::backward`](crate::Tensor::backward).
//! - [`grad_check`]: finite-difference verification of backward rules.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{BackwardOp, GradFn, InputGrads};
pub use graph::NodeId;
