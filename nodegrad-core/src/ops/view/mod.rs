// nodegrad-core/src/ops/view/mod.rs

//! Shape operations. Each produces a new tensor holding its own buffer; the
//! gradient is mapped back to the input shape by the inverse transformation.

pub mod expand;
pub mod permute;
pub mod reshape;
pub mod squeeze_unsqueeze;

pub use expand::expand_op;
pub use permute::permute_op;
pub use reshape::{flatten_op, reshape_op};
pub use squeeze_unsqueeze::{squeeze_op, unsqueeze_op};
