use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::utils::testing::check_tensor_near;
use ndarray::{Array, IxDyn};

#[test]
fn test_permute_transpose_2d() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
    let p = permute_op(&t, &[1, 0]).unwrap();
    check_tensor_near(&p, &[3, 2], &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0], 1e-6);
}

#[test]
fn test_permute_3d_shape() {
    let t = Tensor::new((0..24).map(|x| x as f32).collect(), vec![2, 3, 4]).unwrap();
    let p = permute_op(&t, &[2, 0, 1]).unwrap();
    assert_eq!(p.shape(), vec![4, 2, 3]);
    // p[i, j, k] == t[j, k, i]
    let p_data = p.data();
    let t_data = t.data();
    assert_eq!(p_data[IxDyn(&[3, 1, 2])], t_data[IxDyn(&[1, 2, 3])]);
}

#[test]
fn test_permute_invalid() {
    let t = Tensor::new(vec![1.0; 6], vec![2, 3]).unwrap();
    for dims in [&[0usize][..], &[0, 0][..], &[0, 2][..], &[0, 1, 2][..]] {
        assert!(matches!(
            permute_op(&t, dims),
            Err(NodeGradError::InvalidPermutation { .. })
        ));
    }
}

#[test]
fn test_permute_backward_grad_check() {
    let data = Array::from_shape_fn(IxDyn(&[2, 3, 2]), |idx| (idx[0] * 6 + idx[1] * 2 + idx[2]) as f32 * 0.5 - 2.0);
    let a = Tensor::from_array(data).with_requires_grad(true);
    let output_grad = Array::from_shape_fn(IxDyn(&[3, 2, 2]), |idx| (idx[0] as f32) - (idx[1] as f32) + 0.25 * idx[2] as f32);
    let func = |inputs: &[Tensor]| permute_op(&inputs[0], &[1, 2, 0]);
    let result = check_grad(func, &[a], &output_grad, GradCheckConfig::default());
    assert!(result.is_ok(), "permute grad check failed: {:?}", result.err());
}
