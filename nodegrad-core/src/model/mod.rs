// src/model/mod.rs

//! Containers that compose [`Module`](crate::nn::Module)s into models.

pub mod sequential;

pub use sequential::Sequential;
