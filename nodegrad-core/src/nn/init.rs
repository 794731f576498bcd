// src/nn/init.rs

//! In-place parameter initializers.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::tensor::Tensor;

/// Fills the tensor with zeros.
pub fn zeros_(tensor: &Tensor) {
    tensor.write_data().data_view_mut().fill(0.0);
}

/// He (Kaiming) normal initialization for ReLU networks: samples from
/// `N(0, 2 / fan_in)`.
///
/// Weights are laid out `[in_features, out_features]`, so `fan_in` is the
/// size of the first axis (1 for a 0-dimensional tensor).
pub fn kaiming_normal_<R: Rng + ?Sized>(tensor: &Tensor, rng: &mut R) {
    let mut guard = tensor.write_data();
    let fan_in = guard.shape().first().copied().unwrap_or(1).max(1);
    let std = (2.0 / fan_in as f32).sqrt();
    guard
        .data_view_mut()
        .map_inplace(|x| *x = rng.sample::<f32, _>(StandardNormal) * std);
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
