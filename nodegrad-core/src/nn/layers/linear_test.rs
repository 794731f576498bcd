use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::nn::ReLU;
use crate::utils::testing::{check_grad_near, check_tensor_near};
use ndarray::array;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_linear_creation() {
    let linear = Linear::new(10, 5, true);
    assert_eq!(linear.weight().shape(), vec![10, 5]);
    assert!(linear.weight().requires_grad());
    let bias = linear.bias().unwrap();
    assert_eq!(bias.shape(), vec![5]);
    assert!(bias.requires_grad());
    assert!(bias.data().iter().all(|&b| b == 0.0));
    assert_eq!((linear.in_features(), linear.out_features()), (10, 5));
}

#[test]
fn test_linear_creation_no_bias() {
    let linear = Linear::with_rng(3, 2, false, &mut StdRng::seed_from_u64(0));
    assert!(linear.bias().is_none());
    assert_eq!(linear.parameters().len(), 1);
}

#[test]
fn test_linear_forward_known_weights() {
    let weight = Tensor::from_array(array![[1.0f32, 0.0], [0.0, 1.0], [1.0, 1.0]]);
    let bias = Tensor::from_array(array![0.5f32, -0.5]);
    let linear = Linear::from_tensors(weight, Some(bias)).unwrap();
    let x = Tensor::from_array(array![[1.0f32, 2.0, 3.0], [0.0, -1.0, 1.0]]);
    let y = linear.forward(&x).unwrap();
    check_tensor_near(&y, &[2, 2], &[4.5, 4.5, 1.5, -0.5], 1e-6);
}

#[test]
fn test_linear_from_tensors_validation() {
    let bad_weight = Tensor::new(vec![1.0; 3], vec![3]).unwrap();
    assert!(matches!(
        Linear::from_tensors(bad_weight, None),
        Err(NodeGradError::DimensionMismatch { .. })
    ));
    let weight = Tensor::new(vec![1.0; 6], vec![3, 2]).unwrap();
    let bad_bias = Tensor::new(vec![1.0; 3], vec![3]).unwrap();
    assert!(matches!(
        Linear::from_tensors(weight, Some(bad_bias)),
        Err(NodeGradError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_linear_backward_fills_parameter_grads() {
    let weight = Tensor::from_array(array![[1.0f32, 2.0], [3.0, 4.0]]);
    let bias = Tensor::from_array(array![0.0f32, 0.0]);
    let linear = Linear::from_tensors(weight, Some(bias)).unwrap();
    let x = Tensor::from_array(array![[1.0f32, 1.0], [2.0, 0.0], [0.0, 3.0]]);
    let y = linear.forward(&x).unwrap();
    y.sum_all().unwrap().backward().unwrap();
    // dW = x^T @ ones(3, 2); db = column sums of ones(3, 2).
    check_grad_near(linear.weight(), &[3.0, 3.0, 4.0, 4.0], 1e-6);
    check_grad_near(linear.bias().unwrap(), &[3.0, 3.0], 1e-6);
    // x does not require grad.
    assert!(x.grad().iter().all(|&g| g == 0.0));
}

#[test]
fn test_linear_named_parameters() {
    let linear = Linear::new(2, 2, true);
    let names: Vec<String> = linear.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["weight".to_string(), "bias".to_string()]);
}

#[test]
fn test_linear_relu_grad_check() {
    let w = Tensor::from_array(array![[0.5f32, -1.0], [1.5, 0.25], [-0.75, 2.0]]).with_requires_grad(true);
    let b = Tensor::from_array(array![0.1f32, -0.2]).with_requires_grad(true);
    let x = Tensor::from_array(array![[1.0f32, -2.0, 0.5], [0.3, 0.8, -1.2]]);
    let func = |inputs: &[Tensor]| {
        let layer = Linear::from_tensors(inputs[0].clone(), Some(inputs[1].clone()))?;
        ReLU::new().forward(&layer.forward(&x)?)
    };
    let output_grad = array![[1.0f32, -1.0], [0.5, 2.0]].into_dyn();
    let result = check_grad(func, &[w, b], &output_grad, GradCheckConfig::default());
    assert!(result.is_ok(), "linear grad check failed: {:?}", result.err());
}
