//! Reductions over all elements or a single axis.

pub mod mean;
pub mod sum;
pub(crate) mod utils;

pub use mean::mean_op;
pub use sum::sum_op;
