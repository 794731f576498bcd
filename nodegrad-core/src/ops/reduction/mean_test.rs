use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::utils::testing::{check_grad_near, check_tensor_near};
use ndarray::{arr0, array};

#[test]
fn test_mean_all() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
    let result = mean_op(&t, None, false).unwrap();
    check_tensor_near(&result, &[], &[3.5], 1e-6);
}

#[test]
fn test_mean_axis_divides_by_axis_length() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
    let cols = mean_op(&t, Some(0), false).unwrap();
    check_tensor_near(&cols, &[3], &[2.5, 3.5, 4.5], 1e-6);
    let rows = mean_op(&t, Some(1), true).unwrap();
    check_tensor_near(&rows, &[2, 1], &[2.0, 5.0], 1e-6);
}

#[test]
fn test_mean_invalid_axis() {
    let t = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
    assert!(matches!(mean_op(&t, Some(1), false), Err(NodeGradError::InvalidAxis { .. })));
}

#[test]
fn test_mean_backward_values() {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![4]).unwrap().with_requires_grad(true);
    let m = mean_op(&a, None, false).unwrap();
    m.backward().unwrap();
    check_grad_near(&a, &[0.25; 4], 1e-6);
}

#[test]
fn test_mean_axis_backward() {
    let a = Tensor::new(vec![1.0; 6], vec![2, 3]).unwrap().with_requires_grad(true);
    let m = mean_op(&a, Some(1), false).unwrap();
    m.backward_with_grad(array![3.0f32, 6.0].into_dyn()).unwrap();
    check_grad_near(
        &a,
        &[1.0, 1.0, 1.0, 2.0, 2.0, 2.0],
        1e-6,
    );
}

#[test]
fn test_mean_backward_grad_check() {
    let a = Tensor::from_array(array![[0.5f32, -1.0, 2.0], [1.5, 0.25, -0.75]]).with_requires_grad(true);
    let func = |inputs: &[Tensor]| mean_op(&inputs[0], Some(1), false);
    let result = check_grad(func, &[a.clone()], &array![1.0f32, -2.0].into_dyn(), GradCheckConfig::default());
    assert!(result.is_ok(), "mean(axis) grad check failed: {:?}", result.err());

    let func_all = |inputs: &[Tensor]| mean_op(&inputs[0], None, false);
    let result = check_grad(func_all, &[a], &arr0(1.0f32).into_dyn(), GradCheckConfig::default());
    assert!(result.is_ok(), "mean grad check failed: {:?}", result.err());
}
