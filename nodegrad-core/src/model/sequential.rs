use crate::error::NodeGradError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;

/// A chain of modules applied in insertion order.
#[derive(Debug, Default)]
pub struct Sequential {
    modules: Vec<(String, Box<dyn Module>)>,
}

impl Sequential {
    pub fn new() -> Self {
        Sequential { modules: Vec::new() }
    }

    /// Appends `module` under `name`; names prefix the parameter names
    /// reported by [`Module::named_parameters`].
    pub fn add_module(&mut self, name: &str, module: Box<dyn Module>) {
        self.modules.push((name.to_string(), module));
    }

    /// Builder form of [`Sequential::add_module`].
    pub fn with_module(mut self, name: &str, module: Box<dyn Module>) -> Self {
        self.add_module(name, module);
        self
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn named_children(&self) -> Vec<(&str, &dyn Module)> {
        self.modules
            .iter()
            .map(|(name, module)| (name.as_str(), module.as_ref()))
            .collect()
    }
}

impl Module for Sequential {
    fn forward(&self, input: &Tensor) -> Result<Tensor, NodeGradError> {
        let mut current = input.clone();
        for (_, module) in &self.modules {
            current = module.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.modules
            .iter()
            .flat_map(|(_, module)| module.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (name, module) in &self.modules {
            for (param_name, param) in module.named_parameters() {
                params.push((format!("{}.{}", name, param_name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "sequential_test.rs"]
mod tests;
