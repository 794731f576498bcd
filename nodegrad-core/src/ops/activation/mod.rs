// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear element-wise activations.
//!
//! ## Currently Implemented:
//! - [`relu_op`]: Rectified Linear Unit.

pub mod relu;

pub use relu::relu_op;
