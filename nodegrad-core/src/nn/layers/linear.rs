use rand::Rng;

use crate::error::NodeGradError;
use crate::nn::init::kaiming_normal_;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tensor::{zeros, Tensor};

/// Applies an affine transformation to the incoming data: `y = x @ W + b`.
///
/// The weight is stored `[in_features, out_features]` so the forward pass is
/// a plain 2-D matmul of a `[batch, in_features]` input; the bias
/// `[out_features]` broadcasts over the batch.
#[derive(Debug)]
pub struct Linear {
    pub(crate) weight: Parameter,
    pub(crate) bias: Option<Parameter>,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Creates a new Linear layer with He-normal weights and a zero bias,
    /// drawing from the thread-local generator.
    ///
    /// # Arguments
    ///
    /// * `in_features` - Size of each input sample.
    /// * `out_features` - Size of each output sample.
    /// * `has_bias` - If `true`, the layer will learn an additive bias.
    pub fn new(in_features: usize, out_features: usize, has_bias: bool) -> Self {
        Self::with_rng(in_features, out_features, has_bias, &mut rand::thread_rng())
    }

    /// Like [`Linear::new`], drawing the initial weights from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        has_bias: bool,
        rng: &mut R,
    ) -> Self {
        let weight = zeros(&[in_features, out_features]);
        kaiming_normal_(&weight, rng);
        let bias =
            has_bias.then(|| Parameter::new(zeros(&[out_features]), Some("bias".to_string())));
        Linear {
            weight: Parameter::new(weight, Some("weight".to_string())),
            bias,
            in_features,
            out_features,
        }
    }

    /// Builds a layer from explicit tensors.
    ///
    /// # Errors
    /// * `NodeGradError::DimensionMismatch` if `weight` is not 2-D.
    /// * `NodeGradError::ShapeMismatch` if `bias` is not `[out_features]`.
    pub fn from_tensors(weight: Tensor, bias: Option<Tensor>) -> Result<Self, NodeGradError> {
        let shape = weight.shape();
        if shape.len() != 2 {
            return Err(NodeGradError::DimensionMismatch {
                expected: 2,
                actual: shape.len(),
                operation: "Linear::from_tensors".to_string(),
            });
        }
        let (in_features, out_features) = (shape[0], shape[1]);
        if let Some(b) = &bias {
            if b.shape() != [out_features] {
                return Err(NodeGradError::ShapeMismatch {
                    expected: vec![out_features],
                    actual: b.shape(),
                    operation: "Linear::from_tensors".to_string(),
                });
            }
        }
        Ok(Linear {
            weight: Parameter::new(weight, Some("weight".to_string())),
            bias: bias.map(|b| Parameter::new(b, Some("bias".to_string()))),
            in_features,
            out_features,
        })
    }

    pub fn weight(&self) -> &Parameter {
        &self.weight
    }

    pub fn bias(&self) -> Option<&Parameter> {
        self.bias.as_ref()
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl Module for Linear {
    fn forward(&self, input: &Tensor) -> Result<Tensor, NodeGradError> {
        let output = input.matmul(&self.weight)?;
        match &self.bias {
            Some(bias) => output.add(bias),
            None => Ok(output),
        }
    }

    fn parameters(&self) -> Vec<&Parameter> {
        let mut params = vec![&self.weight];
        if let Some(bias) = &self.bias {
            params.push(bias);
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.parameters()
            .into_iter()
            .map(|p| (p.name().unwrap_or("param").to_string(), p))
            .collect()
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
