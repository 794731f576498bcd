use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::utils::testing::{check_grad_near, check_tensor_near};
use ndarray::{array, ArrayD, IxDyn};

#[test]
fn test_mul_tensors_ok() {
    let t1 = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let t2 = Tensor::new(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2]).unwrap();
    let result = mul_op(&t1, &t2).unwrap();
    check_tensor_near(&result, &[2, 2], &[5.0, 12.0, 21.0, 32.0], 1e-6);
}

#[test]
fn test_mul_broadcast_column() {
    let m = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let col = Tensor::new(vec![10.0, -1.0], vec![2, 1]).unwrap();
    let result = mul_op(&m, &col).unwrap();
    check_tensor_near(&result, &[2, 2], &[10.0, 20.0, -3.0, -4.0], 1e-6);
}

#[test]
fn test_mul_backward_simple() {
    let a = Tensor::new(vec![2.0, 3.0], vec![2]).unwrap().with_requires_grad(true);
    let b = Tensor::new(vec![4.0, 5.0], vec![2]).unwrap().with_requires_grad(true);
    let c = mul_op(&a, &b).unwrap();
    c.backward().unwrap();
    check_grad_near(&a, &[4.0, 5.0], 1e-6);
    check_grad_near(&b, &[2.0, 3.0], 1e-6);
}

#[test]
fn test_mul_backward_no_grad_operand_untouched() {
    let a = Tensor::new(vec![2.0, 3.0], vec![2]).unwrap().with_requires_grad(true);
    let b = Tensor::new(vec![4.0, 5.0], vec![2]).unwrap();
    let c = mul_op(&a, &b).unwrap();
    c.backward().unwrap();
    check_grad_near(&a, &[4.0, 5.0], 1e-6);
    assert!(b.grad().iter().all(|&g| g == 0.0));
}

#[test]
fn test_mul_backward_grad_check_broadcast() {
    let a = Tensor::from_array(array![[1.0f32, -2.0, 0.5], [3.0, 1.5, -1.0]]).with_requires_grad(true);
    let b = Tensor::from_array(array![2.0f32, -0.5, 1.25]).with_requires_grad(true);
    let output_grad = ArrayD::from_shape_vec(IxDyn(&[2, 3]), vec![1.0, 0.5, -1.0, 2.0, -0.5, 1.0]).unwrap();
    let func = |inputs: &[Tensor]| mul_op(&inputs[0], &inputs[1]);
    let result = check_grad(func, &[a, b], &output_grad, GradCheckConfig::default());
    assert!(result.is_ok(), "mul grad check failed: {:?}", result.err());
}
