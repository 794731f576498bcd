use crate::error::NodeGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step using the gradients currently
    /// accumulated on the managed parameters.
    fn step(&mut self) -> Result<(), NodeGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Gradients accumulate across backward passes, so this is typically
    /// called once per training iteration.
    fn zero_grad(&mut self);

    /// Current learning rate.
    fn lr(&self) -> f32;

    fn set_lr(&mut self, lr: f32);
}
