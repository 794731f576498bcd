// src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! This module provides the [`Optimizer`] trait and the [`SgdOptimizer`]
//! implementation. Optimizers hold shallow clones of a module's
//! [`Parameter`](crate::nn::Parameter)s and update their data in place from
//! the gradients left by `backward()`.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
