use log::debug;
use ndarray::ArrayD;

use crate::error::NodeGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum, weight decay, and Nesterov momentum. With
/// `d_p = grad + weight_decay * param`, one step computes
///
/// ```text
/// buf = momentum * buf + d_p            (buf = d_p on the first step)
/// d_p = d_p + momentum * buf            (nesterov)
/// d_p = buf                             (plain momentum)
/// param = param - lr * d_p
/// ```
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f32,
    momentum: f32,
    weight_decay: f32,
    nesterov: bool,
    momentum_buffers: Vec<Option<ArrayD<f32>>>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize. Clones are shallow, so passing
    ///   `module.parameters().into_iter().cloned()` updates the module itself.
    /// * `lr`: The learning rate.
    /// * `momentum`: Momentum factor (0.0 disables momentum).
    /// * `weight_decay`: L2 penalty factor.
    /// * `nesterov`: Enables Nesterov momentum.
    pub fn new(
        params: impl IntoIterator<Item = Parameter>,
        lr: f32,
        momentum: f32,
        weight_decay: f32,
        nesterov: bool,
    ) -> Self {
        let params: Vec<Parameter> = params.into_iter().collect();
        let momentum_buffers = vec![None; params.len()];
        SgdOptimizer {
            params,
            lr,
            momentum,
            weight_decay,
            nesterov,
            momentum_buffers,
        }
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), NodeGradError> {
        let momentum = self.momentum;
        for (param, buffer) in self.params.iter().zip(self.momentum_buffers.iter_mut()) {
            if !param.requires_grad() {
                continue;
            }

            let mut d_p = param.grad();
            if self.weight_decay != 0.0 {
                d_p.scaled_add(self.weight_decay, &param.data());
            }

            if momentum != 0.0 {
                let buf = match buffer.take() {
                    Some(mut buf) => {
                        buf.mapv_inplace(|b| b * momentum);
                        buf += &d_p;
                        buf
                    }
                    None => d_p.clone(),
                };
                if self.nesterov {
                    d_p.scaled_add(momentum, &buf);
                } else {
                    d_p.assign(&buf);
                }
                *buffer = Some(buf);
            }

            let mut guard = param.write_data();
            if guard.shape() != d_p.shape() {
                return Err(NodeGradError::GradientShapeMismatch {
                    expected: guard.shape().to_vec(),
                    actual: d_p.shape().to_vec(),
                });
            }
            guard.data_view_mut().scaled_add(-self.lr, &d_p);
        }
        debug!("SGD step over {} parameter(s), lr={}", self.params.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}
