//! # Training a Simple MLP on the CPU
//!
//! Fits a two-layer perceptron to a fixed synthetic regression target and
//! prints the loss as it decreases.
//!
//! ## Demonstrated:
//! 1.  **Defining a network** by implementing `Module` over two `Linear`
//!     layers and a ReLU.
//! 2.  **Synthetic data**: inputs `X` and targets `Y = X @ W_true`.
//! 3.  **Training loop**: forward, `MSELoss::calculate`, `backward`,
//!     `SgdOptimizer::step`, `zero_grad`.
//!
//! ## Running
//! `RUST_LOG=debug cargo run --example basic_mlp_cpu`

use nodegrad_core::nn::{Linear, MSELoss, Module, Parameter, Reduction};
use nodegrad_core::optim::{Optimizer, SgdOptimizer};
use nodegrad_core::tensor::randn_with_rng;
use nodegrad_core::{NodeGradError, Tensor};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Linear -> ReLU -> Linear
#[derive(Debug)]
pub struct SimpleMLP {
    linear1: Linear,
    linear2: Linear,
}

impl SimpleMLP {
    pub fn new(in_features: usize, hidden: usize, out_features: usize, rng: &mut StdRng) -> Self {
        SimpleMLP {
            linear1: Linear::with_rng(in_features, hidden, true, rng),
            linear2: Linear::with_rng(hidden, out_features, true, rng),
        }
    }
}

impl Module for SimpleMLP {
    fn forward(&self, input: &Tensor) -> Result<Tensor, NodeGradError> {
        let x = self.linear1.forward(input)?.relu();
        self.linear2.forward(&x)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        let mut params = self.linear1.parameters();
        params.extend(self.linear2.parameters());
        params
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut named = Vec::new();
        for (prefix, layer) in [("linear1", &self.linear1), ("linear2", &self.linear2)] {
            for (name, param) in layer.named_parameters() {
                named.push((format!("{}.{}", prefix, name), param));
            }
        }
        named
    }
}

fn main() -> Result<(), NodeGradError> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(42);

    let (batch_size, in_features, hidden, out_features) = (16, 4, 8, 2);
    let mlp = SimpleMLP::new(in_features, hidden, out_features, &mut rng);
    for (name, param) in mlp.named_parameters() {
        println!("{}: {:?}", name, param.shape());
    }

    let x = randn_with_rng(&[batch_size, in_features], &mut rng);
    let w_true = randn_with_rng(&[in_features, out_features], &mut rng);
    let y = x.matmul(&w_true)?;

    let loss_fn = MSELoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::new(mlp.parameters().into_iter().cloned(), 0.05, 0.9, 0.0, false);

    for epoch in 0..50 {
        optimizer.zero_grad();
        let prediction = mlp.forward(&x)?;
        let loss = loss_fn.calculate(&prediction, &y)?;
        loss.backward()?;
        optimizer.step()?;
        if epoch % 10 == 0 {
            println!("Epoch: {}, Loss: {:.6}", epoch, loss.item()?);
        }
    }

    let final_loss = loss_fn.calculate(&mlp.forward(&x)?, &y)?;
    println!("Final loss: {:.6}", final_loss.item()?);
    Ok(())
}
