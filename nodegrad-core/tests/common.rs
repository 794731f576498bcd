use nodegrad_core::Tensor;

/// Routes `log` output through the test harness. Safe to call from every test.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A leaf tensor that requires grad.
#[allow(dead_code)]
pub fn leaf(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape)
        .expect("Test tensor creation failed")
        .with_requires_grad(true)
}

/// Row-major copy of the tensor's gradient.
#[allow(dead_code)]
pub fn grad_vec(t: &Tensor) -> Vec<f32> {
    t.grad().iter().copied().collect()
}
