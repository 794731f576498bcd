// src/tensor/create.rs

use ndarray::{ArrayD, IxDyn};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::tensor::Tensor;

/// Creates a leaf tensor filled with zeros.
pub fn zeros(shape: &[usize]) -> Tensor {
    full(shape, 0.0)
}

/// Creates a leaf tensor filled with ones.
pub fn ones(shape: &[usize]) -> Tensor {
    full(shape, 1.0)
}

/// Creates a leaf tensor filled with `value`.
pub fn full(shape: &[usize], value: f32) -> Tensor {
    Tensor::from_array(ArrayD::from_elem(IxDyn(shape), value))
}

/// Zeros with the shape of `tensor`.
pub fn zeros_like(tensor: &Tensor) -> Tensor {
    zeros(&tensor.shape())
}

/// Ones with the shape of `tensor`.
pub fn ones_like(tensor: &Tensor) -> Tensor {
    ones(&tensor.shape())
}

/// Samples a leaf tensor from the standard normal distribution using the
/// thread-local generator.
pub fn randn(shape: &[usize]) -> Tensor {
    randn_with_rng(shape, &mut rand::thread_rng())
}

/// Like [`randn`], drawing from `rng` so results can be reproduced with a
/// seeded generator.
pub fn randn_with_rng<R: Rng + ?Sized>(shape: &[usize], rng: &mut R) -> Tensor {
    let array = ArrayD::from_shape_simple_fn(IxDyn(shape), || rng.sample::<f32, _>(StandardNormal));
    Tensor::from_array(array)
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
