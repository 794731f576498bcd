use std::fmt::Debug;

use crate::error::NodeGradError;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;

/// The base trait for all neural network modules (layers, containers, etc.).
pub trait Module: Debug {
    /// Performs a forward pass of the module.
    fn forward(&self, input: &Tensor) -> Result<Tensor, NodeGradError>;

    /// Returns all learnable parameters of the module, including those of
    /// sub-modules, in a stable order.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns the parameters along with hierarchical names
    /// (e.g. `"layer1.weight"`).
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::ones;
    use ndarray::array;

    #[derive(Debug)]
    struct MockModule {
        param: Parameter,
    }

    impl Module for MockModule {
        fn forward(&self, input: &Tensor) -> Result<Tensor, NodeGradError> {
            input.mul(&self.param)
        }

        fn parameters(&self) -> Vec<&Parameter> {
            vec![&self.param]
        }

        fn named_parameters(&self) -> Vec<(String, &Parameter)> {
            let name = self.param.name().unwrap_or("param").to_string();
            vec![(name, &self.param)]
        }
    }

    #[test]
    fn test_module_zero_grad_resets_parameters() {
        let module = MockModule {
            param: Parameter::new_unnamed(Tensor::new(vec![2.0, 3.0], vec![2]).unwrap()),
        };
        let out = module.forward(&ones(&[2])).unwrap();
        out.backward().unwrap();
        assert_eq!(module.param.grad(), array![1.0f32, 1.0].into_dyn());

        module.zero_grad();
        assert_eq!(module.param.grad(), array![0.0f32, 0.0].into_dyn());
        assert_eq!(module.named_parameters()[0].0, "param");
    }
}
