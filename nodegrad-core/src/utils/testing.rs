use crate::tensor::Tensor;

/// Checks that a tensor has `expected_shape` and that its data, read in
/// row-major order, is within `tolerance` of `expected_data`.
///
/// Panics with the first mismatching index otherwise.
pub fn check_tensor_near(
    actual: &Tensor,
    expected_shape: &[usize],
    expected_data: &[f32],
    tolerance: f32,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");

    let actual_data = actual.data();
    assert_eq!(
        actual_data.len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual_data.iter().zip(expected_data.iter()).enumerate() {
        let diff = (*a - *e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Like [`check_tensor_near`], for the tensor's accumulated gradient.
pub fn check_grad_near(
    tensor: &Tensor,
    expected_data: &[f32],
    tolerance: f32,
) {
    let grad = Tensor::from_array(tensor.grad());
    check_tensor_near(&grad, &tensor.shape(), expected_data, tolerance);
}
