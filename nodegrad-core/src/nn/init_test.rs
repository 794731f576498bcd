use super::*;
use crate::tensor::{ones, zeros};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_zeros_() {
    let t = ones(&[2, 3]);
    zeros_(&t);
    assert!(t.data().iter().all(|&x| x == 0.0));
}

#[test]
fn test_kaiming_normal_spread() {
    let t = zeros(&[50, 200]);
    kaiming_normal_(&t, &mut StdRng::seed_from_u64(7));
    let data = t.data();
    let mean = data.mean().unwrap();
    let var = data.mapv(|x| (x - mean) * (x - mean)).mean().unwrap();
    // Expected variance 2 / 50 = 0.04.
    assert!(mean.abs() < 0.02, "mean {}", mean);
    assert!((var - 0.04).abs() < 0.008, "variance {}", var);
}

#[test]
fn test_kaiming_normal_reproducible() {
    let a = zeros(&[4, 4]);
    let b = zeros(&[4, 4]);
    kaiming_normal_(&a, &mut StdRng::seed_from_u64(1));
    kaiming_normal_(&b, &mut StdRng::seed_from_u64(1));
    assert_eq!(a.data(), b.data());
}
