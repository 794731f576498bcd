// src/nn/mod.rs

//! Neural-network building blocks assembled from the core tensor operations:
//! the [`Module`] trait, learnable [`Parameter`]s, layers, losses and
//! initializers.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use layers::{Linear, ReLU};
pub use losses::{MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
