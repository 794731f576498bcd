use super::*;
use approx::assert_abs_diff_eq;
use ndarray::{arr0, array, ArrayD, IxDyn};

#[test]
fn test_reduce_same_shape_is_identity() {
    let g = array![[1.0f32, 2.0], [3.0, 4.0]].into_dyn();
    assert_eq!(reduce_to_shape(&g, &[2, 2]).unwrap(), g);
}

#[test]
fn test_reduce_leading_axes() {
    // [2, 3] -> [3]: sum over the prepended axis.
    let g = array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]].into_dyn();
    let r = reduce_to_shape(&g, &[3]).unwrap();
    assert_eq!(r, array![5.0f32, 7.0, 9.0].into_dyn());
}

#[test]
fn test_reduce_unit_axes_keep_dims() {
    let g = array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]].into_dyn();
    let rows = reduce_to_shape(&g, &[2, 1]).unwrap();
    assert_eq!(rows, array![[6.0f32], [15.0]].into_dyn());
    let cols = reduce_to_shape(&g, &[1, 3]).unwrap();
    assert_eq!(cols, array![[5.0f32, 7.0, 9.0]].into_dyn());
    let all = reduce_to_shape(&g, &[1, 1]).unwrap();
    assert_eq!(all, array![[21.0f32]].into_dyn());
}

#[test]
fn test_reduce_to_scalar_target() {
    let g = array![[1.0f32, 2.0], [3.0, 4.0]].into_dyn();
    let r = reduce_to_shape(&g, &[]).unwrap();
    assert_eq!(r.ndim(), 0);
    assert_abs_diff_eq!(r.sum(), 10.0);
}

#[test]
fn test_reduce_scalar_gradient_is_replicated() {
    let g = arr0(2.5f32).into_dyn();
    let r = reduce_to_shape(&g, &[2, 2]).unwrap();
    assert_eq!(r, ArrayD::from_elem(IxDyn(&[2, 2]), 2.5f32));
}

#[test]
fn test_reduce_incompatible_shape_fails() {
    let g = array![[1.0f32, 2.0, 3.0]].into_dyn();
    assert!(matches!(
        reduce_to_shape(&g, &[2]),
        Err(NodeGradError::BroadcastError { .. })
    ));
}

#[test]
fn test_reduce_does_not_modify_input() {
    let g = array![[1.0f32, 2.0], [3.0, 4.0]].into_dyn();
    let before = g.clone();
    let _ = reduce_to_shape(&g, &[1, 2]).unwrap();
    assert_eq!(g, before);
}

#[test]
fn test_reduce_inverts_expand() {
    // reduce(expand(v, S), shape(v)) == v * (|S| / |v|)
    let v = array![[1.0f32], [2.0], [3.0]].into_dyn(); // [3, 1]
    let cases: [&[usize]; 3] = [&[3, 4], &[2, 3, 4], &[5, 3, 1]];
    for target in cases {
        let expanded = broadcast_view(&v, target).unwrap().to_owned();
        let reduced = reduce_to_shape(&expanded, v.shape()).unwrap();
        let factor = (target.iter().product::<usize>() / v.len()) as f32;
        assert_abs_diff_eq!(reduced, v.mapv(|x| x * factor), epsilon = 1e-6);
    }

    // Adding only unit axes replicates nothing, so the round trip is exact.
    let expanded = broadcast_view(&v, &[1, 1, 3, 1]).unwrap().to_owned();
    assert_eq!(reduce_to_shape(&expanded, v.shape()).unwrap(), v);
}
