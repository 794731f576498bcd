use super::*;
use crate::utils::testing::{check_grad_near, check_tensor_near};
use ndarray::array;

#[test]
fn test_squeeze_single_axis() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0], vec![1, 3, 1]).unwrap();
    let s = squeeze_op(&t, Some(0)).unwrap();
    assert_eq!(s.shape(), vec![3, 1]);
    assert_eq!(s.grad_fn_name(), Some("SqueezeBackward"));
}

#[test]
fn test_squeeze_all_unit_axes() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0], vec![1, 3, 1]).unwrap();
    let s = squeeze_op(&t, None).unwrap();
    check_tensor_near(&s, &[3], &[1.0, 2.0, 3.0], 1e-6);

    let one = Tensor::new(vec![7.0], vec![1, 1]).unwrap();
    assert_eq!(squeeze_op(&one, None).unwrap().shape(), Vec::<usize>::new());
}

#[test]
fn test_squeeze_errors() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0], vec![1, 3]).unwrap();
    assert_eq!(
        squeeze_op(&t, Some(1)).unwrap_err(),
        NodeGradError::InvalidSqueeze { axis: 1, size: 3 }
    );
    assert_eq!(
        squeeze_op(&t, Some(2)).unwrap_err(),
        NodeGradError::InvalidAxis { axis: 2, rank: 2 }
    );
}

#[test]
fn test_unsqueeze() {
    let t = Tensor::new(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
    assert_eq!(unsqueeze_op(&t, 0).unwrap().shape(), vec![1, 3]);
    assert_eq!(unsqueeze_op(&t, 1).unwrap().shape(), vec![3, 1]);
    assert_eq!(
        unsqueeze_op(&t, 2).unwrap_err(),
        NodeGradError::InvalidAxis { axis: 2, rank: 2 }
    );
}

#[test]
fn test_squeeze_unsqueeze_backward_round_trip() {
    let a = Tensor::new(vec![1.0, 2.0, 3.0], vec![3]).unwrap().with_requires_grad(true);
    let u = unsqueeze_op(&a, 0).unwrap();
    let s = squeeze_op(&u, Some(0)).unwrap();
    s.backward_with_grad(array![4.0f32, 5.0, 6.0].into_dyn()).unwrap();
    assert_eq!(u.grad().shape(), &[1, 3]);
    check_grad_near(&a, &[4.0, 5.0, 6.0], 1e-6);
}
